//! 远程 API 数据模型
//!
//! 远程服务返回的形状比较松散，所有可缺省字段都声明默认值，
//! 对应各页面的回退展示行为。本地持有的商品数据只是快照，
//! 下一次导航后即失效。

use serde::{Deserialize, Serialize};

/// 商品分类
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
}

/// 商品（远程所有，本地为快照）
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub description: String,
    /// 扁平的分类外键（部分响应提供）
    #[serde(default, rename = "categoryId")]
    pub category_id: Option<i64>,
    /// 嵌套的分类对象（列表接口提供）
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// 列表视图展示的缩略图
    ///
    /// 取自分类的 image 字段而非商品自身的 images，沿用既有行为。
    pub fn display_image(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.image.as_str())
            .unwrap_or("")
    }

    /// 分类显示名，无分类时为空
    pub fn category_name(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("")
    }

    /// 分类 ID 回退链：嵌套对象 -> 扁平字段 -> 缺失
    pub fn effective_category_id(&self) -> Option<i64> {
        self.category.as_ref().map(|c| c.id).or(self.category_id)
    }
}

/// 创建用户请求（注册页）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub avatar: String,
}

/// 登录请求
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// 登录响应只关心 access_token，其余字段忽略
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// 创建 / 全量更新商品共用的载荷
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPayload {
    pub title: String,
    pub price: f64,
    pub description: String,
    #[serde(rename = "categoryId")]
    pub category_id: i64,
    /// 形状为序列，但本客户端只会放入一个元素
    pub images: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_with_nested_category() {
        let json = r#"{
            "id": 7,
            "title": "椅子",
            "price": 19.99,
            "description": "一把椅子",
            "images": ["https://example.com/a.jpg"],
            "category": { "id": 3, "name": "家具", "image": "https://example.com/c.jpg" }
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.effective_category_id(), Some(3));
        assert_eq!(product.category_name(), "家具");
        // 缩略图来自分类而不是商品自身的 images
        assert_eq!(product.display_image(), "https://example.com/c.jpg");
    }

    #[test]
    fn product_with_flat_category_id_only() {
        let json = r#"{ "id": 1, "title": "t", "price": 1.0, "categoryId": 9 }"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.effective_category_id(), Some(9));
        assert_eq!(product.display_image(), "");
        assert_eq!(product.category_name(), "");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let product: Product = serde_json::from_str(r#"{ "id": 5 }"#).unwrap();

        assert_eq!(product.title, "");
        assert_eq!(product.price, 0.0);
        assert_eq!(product.description, "");
        assert_eq!(product.effective_category_id(), None);
        assert!(product.images.is_empty());
    }

    #[test]
    fn payload_serializes_with_camel_case_category_key() {
        let payload = ProductPayload {
            title: "Widget".to_string(),
            price: 19.99,
            description: String::new(),
            category_id: 3,
            images: vec!["https://example.com/a.jpg".to_string()],
        };
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["categoryId"], 3);
        assert_eq!(value["price"], 19.99);
        assert_eq!(value["images"].as_array().unwrap().len(), 1);
        assert!(value.get("category_id").is_none());
    }
}
