//! 会话模块
//!
//! Token 即会话：LocalStorage 中存在 Token 就视为已登录，
//! 客户端不做任何过期或签名校验（无效 Token 由远程 API 自行拒绝）。
//! 路由层通过就地渲染实现门卫，与本模块解耦。

use crate::web::LocalStorage;
use leptos::prelude::*;

/// Token 的固定存储键，页面刷新后会话仍然有效
const TOKEN_KEY: &str = "shopfront_token";

/// 会话上下文
///
/// 内部只有一个 RwSignal，Copy 语义便于在组件间传递。
#[derive(Clone, Copy)]
pub struct SessionContext {
    token: RwSignal<Option<String>>,
}

impl SessionContext {
    /// 从 LocalStorage 恢复会话状态
    pub fn new() -> Self {
        Self {
            token: RwSignal::new(LocalStorage::get(TOKEN_KEY)),
        }
    }

    /// 是否已登录（只看 Token 是否存在）
    pub fn is_authenticated(&self) -> bool {
        self.token.with(|t| t.is_some())
    }

    /// 登录成功后持久化 Token 并更新内存状态
    pub fn login(&self, token: String) {
        LocalStorage::set(TOKEN_KEY, &token);
        self.token.set(Some(token));
    }

    /// 注销：清除 Token。导航由调用方负责。
    pub fn logout(&self) {
        LocalStorage::delete(TOKEN_KEY);
        self.token.set(None);
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}
