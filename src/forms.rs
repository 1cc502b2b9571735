//! 表单草稿模块
//!
//! 将各页面的校验与载荷构造收敛为不含 signal 的纯结构体，负责：
//! - 草稿数据的持有
//! - 提交前的本地校验（校验失败时不发起任何网络请求）
//! - 草稿到 API 载荷的转换
//!
//! 草稿的生命周期与页面一致：离开页面即丢弃，提交失败时保留以便重试。

use crate::model::{LoginRequest, ProductPayload, RegisterRequest};

/// 注册页的固定头像地址（不可编辑）
pub const DEFAULT_AVATAR: &str =
    "https://treesforall.nl/app/uploads/2022/03/Bos-Nederland-Epe-e1719389547661-0x1400-c-default.webp";

/// 创建商品未选择图片时的兜底占位图
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x300?text=Product";

/// 更新商品页图片字段的初始默认值
pub const UPDATE_FALLBACK_IMAGE: &str =
    "https://triprindia.com/cdn/shop/files/133close2.jpg?v=1741861567&width=1200";

/// 注册表单草稿
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterDraft {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterDraft {
    /// 所有字段 trim 后非空才允许发起请求
    pub fn validate(&self) -> Result<RegisterRequest, &'static str> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.trim().is_empty()
        {
            return Err("姓名、邮箱和密码均为必填项");
        }

        Ok(RegisterRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            avatar: DEFAULT_AVATAR.to_string(),
        })
    }
}

/// 登录表单草稿
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

impl LoginDraft {
    pub fn validate(&self) -> Result<LoginRequest, &'static str> {
        if self.email.trim().is_empty() || self.password.trim().is_empty() {
            return Err("请输入邮箱和密码");
        }

        Ok(LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// 商品表单草稿，创建页与更新页共用，但两页的校验规则不同
///
/// 所有字段都以字符串持有（与输入框一一对应），转换为载荷时才解析数字。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub title: String,
    pub price: String,
    pub description: String,
    pub category_id: String,
    pub image: String,
}

impl ProductDraft {
    /// 从远程商品预填草稿（更新页）
    ///
    /// 缺失字段回退为空；价格为 0 时预填为空而不是 "0"；
    /// 分类 ID 按 嵌套对象 -> 扁平字段 -> 空 的顺序取值。
    pub fn from_product(product: &crate::model::Product) -> Self {
        Self {
            title: product.title.clone(),
            price: if product.price == 0.0 {
                String::new()
            } else {
                format!("{}", product.price)
            },
            description: product.description.clone(),
            category_id: product
                .effective_category_id()
                .map(|id| id.to_string())
                .unwrap_or_default(),
            image: product.images.first().cloned().unwrap_or_default(),
        }
    }

    /// 创建页校验与载荷构造
    ///
    /// 按 标题 -> 价格 -> 分类 的顺序检查，首个失败即返回，
    /// 三者共用同一条提示。图片为空时落到固定占位图。
    pub fn create_payload(&self) -> Result<ProductPayload, &'static str> {
        const REQUIRED: &str = "标题、价格和分类为必填项";

        if self.title.trim().is_empty() {
            return Err(REQUIRED);
        }
        let price: f64 = self.price.trim().parse().map_err(|_| REQUIRED)?;
        let category_id: i64 = self.category_id.trim().parse().map_err(|_| REQUIRED)?;

        let image = if self.image.trim().is_empty() {
            PLACEHOLDER_IMAGE.to_string()
        } else {
            self.image.clone()
        };

        Ok(ProductPayload {
            title: self.title.trim().to_string(),
            price,
            description: self.description.trim().to_string(),
            category_id,
            images: vec![image],
        })
    }

    /// 更新页校验与载荷构造
    ///
    /// 价格必须为严格正数；分类 ID 解析失败时退回 1
    /// （沿用既有的宽松行为，与创建页有意保持不一致）。
    pub fn update_payload(&self) -> Result<ProductPayload, &'static str> {
        if self.title.trim().is_empty() {
            return Err("标题不能为空");
        }

        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| "价格必须为正数")?;
        if price <= 0.0 {
            return Err("价格必须为正数");
        }

        let category_id: i64 = self.category_id.trim().parse().unwrap_or(1);

        Ok(ProductPayload {
            title: self.title.clone(),
            price,
            description: self.description.clone(),
            category_id,
            images: vec![self.image.clone()],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;

    fn product_from_json(json: &str) -> Product {
        serde_json::from_str(json).unwrap()
    }

    // ---------------------------------------------------------------
    // 注册 / 登录
    // ---------------------------------------------------------------

    #[test]
    fn register_rejects_any_missing_field() {
        for (name, email, password) in [
            ("", "a@b.c", "pw"),
            ("n", "", "pw"),
            ("n", "a@b.c", ""),
            ("   ", "a@b.c", "pw"),
            ("", "", ""),
        ] {
            let draft = RegisterDraft {
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            };
            assert!(draft.validate().is_err(), "{:?} 应当被拒绝", draft);
        }
    }

    #[test]
    fn register_attaches_default_avatar() {
        let draft = RegisterDraft {
            name: "张三".to_string(),
            email: "a@b.c".to_string(),
            password: "pw".to_string(),
        };
        let req = draft.validate().unwrap();

        assert_eq!(req.avatar, DEFAULT_AVATAR);
        assert_eq!(req.name, "张三");
    }

    #[test]
    fn login_requires_both_fields() {
        assert!(LoginDraft::default().validate().is_err());
        assert!(
            LoginDraft {
                email: "a@b.c".to_string(),
                password: "  ".to_string(),
            }
            .validate()
            .is_err()
        );
        assert!(
            LoginDraft {
                email: "a@b.c".to_string(),
                password: "pw".to_string(),
            }
            .validate()
            .is_ok()
        );
    }

    // ---------------------------------------------------------------
    // 创建商品
    // ---------------------------------------------------------------

    #[test]
    fn create_builds_numeric_payload_with_placeholder_image() {
        let draft = ProductDraft {
            title: "Widget".to_string(),
            price: "19.99".to_string(),
            category_id: "3".to_string(),
            ..Default::default()
        };
        let payload = draft.create_payload().unwrap();

        assert_eq!(payload.price, 19.99);
        assert_eq!(payload.category_id, 3);
        assert_eq!(payload.images, vec![PLACEHOLDER_IMAGE.to_string()]);
    }

    #[test]
    fn create_stops_at_first_missing_field() {
        let mut draft = ProductDraft::default();
        assert!(draft.create_payload().is_err());

        draft.title = "Widget".to_string();
        assert!(draft.create_payload().is_err());

        draft.price = "9.5".to_string();
        assert!(draft.create_payload().is_err());

        draft.category_id = "2".to_string();
        assert!(draft.create_payload().is_ok());
    }

    #[test]
    fn create_rejects_unparseable_price_and_category() {
        let draft = ProductDraft {
            title: "Widget".to_string(),
            price: "abc".to_string(),
            category_id: "3".to_string(),
            ..Default::default()
        };
        assert!(draft.create_payload().is_err());

        let draft = ProductDraft {
            title: "Widget".to_string(),
            price: "1".to_string(),
            category_id: "x".to_string(),
            ..Default::default()
        };
        assert!(draft.create_payload().is_err());
    }

    #[test]
    fn create_trims_title_and_description() {
        let draft = ProductDraft {
            title: "  Widget  ".to_string(),
            price: "1".to_string(),
            category_id: "1".to_string(),
            description: "  desc  ".to_string(),
            image: "https://example.com/i.jpg".to_string(),
        };
        let payload = draft.create_payload().unwrap();

        assert_eq!(payload.title, "Widget");
        assert_eq!(payload.description, "desc");
        assert_eq!(payload.images, vec!["https://example.com/i.jpg".to_string()]);
    }

    // ---------------------------------------------------------------
    // 更新商品
    // ---------------------------------------------------------------

    #[test]
    fn prefill_leaves_zero_price_empty() {
        let product =
            product_from_json(r#"{ "id": 42, "title": "t", "price": 0 }"#);
        let draft = ProductDraft::from_product(&product);

        assert_eq!(draft.price, "");
        assert_eq!(draft.category_id, "");
        assert_eq!(draft.image, "");
    }

    #[test]
    fn prefill_prefers_nested_category() {
        let product = product_from_json(
            r#"{
                "id": 1, "title": "t", "price": 5.5, "categoryId": 8,
                "category": { "id": 2, "name": "n", "image": "i" },
                "images": ["https://example.com/first.jpg", "https://example.com/second.jpg"]
            }"#,
        );
        let draft = ProductDraft::from_product(&product);

        assert_eq!(draft.category_id, "2");
        assert_eq!(draft.price, "5.5");
        assert_eq!(draft.image, "https://example.com/first.jpg");
    }

    #[test]
    fn update_rejects_non_positive_price() {
        let mut draft = ProductDraft {
            title: "t".to_string(),
            price: "-5".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.update_payload(), Err("价格必须为正数"));

        draft.price = "0".to_string();
        assert_eq!(draft.update_payload(), Err("价格必须为正数"));

        draft.price = "abc".to_string();
        assert_eq!(draft.update_payload(), Err("价格必须为正数"));
    }

    #[test]
    fn update_defaults_unparseable_category_to_one() {
        let draft = ProductDraft {
            title: "t".to_string(),
            price: "2".to_string(),
            category_id: "".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.update_payload().unwrap().category_id, 1);

        let draft = ProductDraft {
            title: "t".to_string(),
            price: "2".to_string(),
            category_id: "7".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.update_payload().unwrap().category_id, 7);
    }

    #[test]
    fn update_requires_title() {
        let draft = ProductDraft {
            price: "2".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.update_payload(), Err("标题不能为空"));
    }
}
