//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其路径映射。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 注册页面 (默认路由)
    #[default]
    Register,
    /// 登录页面
    Login,
    /// 商品目录 (受保护，由会话门卫就地切换)
    Home,
    /// 管理后台 - 创建商品
    AdminCreate,
    /// 管理后台 - 商品列表
    AdminList,
    /// 管理后台 - 更新商品（携带商品 ID）
    AdminUpdate(i64),
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    ///
    /// `/admin` 裸路径落到商品列表；更新路由的 ID 无法解析时视为 404。
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Self::Register,
            "/login" => Self::Login,
            "/home" => Self::Home,
            "/admin/create" => Self::AdminCreate,
            "/admin" | "/admin/view" => Self::AdminList,
            other => match other.strip_prefix("/admin/update/") {
                Some(id) => id
                    .parse()
                    .map(Self::AdminUpdate)
                    .unwrap_or(Self::NotFound),
                None => Self::NotFound,
            },
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Register => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Home => "/home".to_string(),
            Self::AdminCreate => "/admin/create".to_string(),
            Self::AdminList => "/admin/view".to_string(),
            Self::AdminUpdate(id) => format!("/admin/update/{}", id),
            Self::NotFound => "/404".to_string(),
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_static_paths() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Register);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/home"), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/admin/create"), AppRoute::AdminCreate);
        assert_eq!(AppRoute::from_path("/admin/view"), AppRoute::AdminList);
        assert_eq!(AppRoute::from_path("/admin"), AppRoute::AdminList);
    }

    #[test]
    fn parses_update_route_with_id() {
        assert_eq!(
            AppRoute::from_path("/admin/update/42"),
            AppRoute::AdminUpdate(42)
        );
        assert_eq!(AppRoute::AdminUpdate(42).to_path(), "/admin/update/42");
    }

    #[test]
    fn bad_update_id_is_not_found() {
        assert_eq!(AppRoute::from_path("/admin/update/abc"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/admin/update/"), AppRoute::NotFound);
    }

    #[test]
    fn unknown_path_is_not_found() {
        assert_eq!(AppRoute::from_path("/nonsense"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/admin/other"), AppRoute::NotFound);
    }

    #[test]
    fn static_paths_round_trip() {
        for route in [
            AppRoute::Register,
            AppRoute::Login,
            AppRoute::Home,
            AppRoute::AdminCreate,
            AppRoute::AdminList,
        ] {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }
}
