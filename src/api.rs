//! 远程商品 API 客户端
//!
//! 所有持久化、校验与业务规则都在远程服务一侧，这里只负责
//! 请求/响应的搬运与错误归类。请求不附带 Token：远程目录接口
//! 是公开的，管理角色仅由客户端的 Token 存在性门卫区分。

use gloo_net::http::{Request, Response};
use serde::Deserialize;

use crate::model::{
    Category, LoginRequest, LoginResponse, Product, ProductPayload, RegisterRequest,
};

/// 远程 API 根地址（固定的外部协作方）
const BASE_URL: &str = "https://api.escuelajs.co/api/v1";

/// API 错误分类
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 网络层失败（请求未发出或无响应）
    Network(String),
    /// 非 2xx 响应，携带状态码与尽力提取的服务端消息
    Status { code: u16, message: String },
    /// 响应体解析失败
    Parse(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "网络错误: {}", msg),
            ApiError::Status { code, message } if message.is_empty() => {
                write!(f, "远程服务返回 {}", code)
            }
            ApiError::Status { code, message } => {
                write!(f, "远程服务返回 {}: {}", code, message)
            }
            ApiError::Parse(msg) => write!(f, "响应解析失败: {}", msg),
        }
    }
}

impl ApiError {
    /// HTTP 状态码（仅 Status 变体有）
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// 服务端在 4xx 响应体中提供的消息，没有则为 None
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

/// 服务端错误响应体的形状（message 可能是字符串或缺失）
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// 将非 2xx 响应转为带服务端消息的错误
async fn status_error(res: Response) -> ApiError {
    let code = res.status();
    let message = match res.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => String::new(),
    };

    ApiError::Status { code, message }
}

/// 商品目录 API 客户端
///
/// 无状态：根地址固定，所有方法都是静态的。
pub struct ShopApi;

impl ShopApi {
    fn url(path: &str) -> String {
        format!("{}{}", BASE_URL, path)
    }

    /// 注册新用户
    pub async fn create_user(req: &RegisterRequest) -> Result<(), ApiError> {
        let res = Request::post(&Self::url("/users"))
            .json(req)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !res.ok() {
            return Err(status_error(res).await);
        }

        Ok(())
    }

    /// 登录，返回不透明的 Bearer Token
    pub async fn login(req: &LoginRequest) -> Result<String, ApiError> {
        let res = Request::post(&Self::url("/auth/login"))
            .json(req)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !res.ok() {
            return Err(status_error(res).await);
        }

        let body: LoginResponse = res
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        Ok(body.access_token)
    }

    /// 获取全部商品
    pub async fn get_products() -> Result<Vec<Product>, ApiError> {
        let res = Request::get(&Self::url("/products"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !res.ok() {
            return Err(status_error(res).await);
        }

        res.json().await.map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// 按 ID 获取单个商品
    pub async fn get_product(id: i64) -> Result<Product, ApiError> {
        let res = Request::get(&Self::url(&format!("/products/{}", id)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !res.ok() {
            return Err(status_error(res).await);
        }

        res.json().await.map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// 获取全部分类（创建页的选择器）
    pub async fn get_categories() -> Result<Vec<Category>, ApiError> {
        let res = Request::get(&Self::url("/categories"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !res.ok() {
            return Err(status_error(res).await);
        }

        res.json().await.map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// 创建商品
    pub async fn create_product(payload: &ProductPayload) -> Result<Product, ApiError> {
        let res = Request::post(&Self::url("/products"))
            .json(payload)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !res.ok() {
            return Err(status_error(res).await);
        }

        res.json().await.map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// 全量替换更新商品
    pub async fn update_product(id: i64, payload: &ProductPayload) -> Result<Product, ApiError> {
        let res = Request::put(&Self::url(&format!("/products/{}", id)))
            .json(payload)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !res.ok() {
            return Err(status_error(res).await);
        }

        res.json().await.map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// 按 ID 删除商品
    pub async fn delete_product(id: i64) -> Result<(), ApiError> {
        let res = Request::delete(&Self::url(&format!("/products/{}", id)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !res.ok() {
            return Err(status_error(res).await);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_accessors() {
        let err = ApiError::Status {
            code: 400,
            message: "price must be positive".to_string(),
        };
        assert_eq!(err.status_code(), Some(400));
        assert_eq!(err.server_message(), Some("price must be positive"));

        let bare = ApiError::Status {
            code: 500,
            message: String::new(),
        };
        assert_eq!(bare.server_message(), None);

        assert_eq!(ApiError::Network("x".to_string()).status_code(), None);
    }
}
