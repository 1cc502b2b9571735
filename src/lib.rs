//! Shopfront 前端应用
//!
//! 商品目录的浏览与管理客户端。采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `session`: 会话状态管理（Token 即会话）
//! - `api`: 远程商品 API 客户端
//! - `forms`: 表单草稿与校验（纯逻辑，可单测）
//! - `components`: UI 组件层

mod api;
mod forms;
mod model;
mod session;

mod components {
    pub mod admin_nav;
    pub mod create_product;
    pub mod home;
    pub mod login;
    pub mod product_list;
    pub mod register;
    pub mod toast;
    pub mod update_product;
}

use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，
// 所有对 window.history / localStorage 的操作都集中在此。
pub(crate) mod web {
    pub mod route;
    pub mod router;
    mod storage;

    pub use storage::LocalStorage;
}

use crate::components::admin_nav::AdminNav;
use crate::components::create_product::CreatePage;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::product_list::ProductListPage;
use crate::components::register::RegisterPage;
use crate::components::toast::{ToastContext, ToastHost};
use crate::components::update_product::UpdatePage;
use crate::session::{SessionContext, use_session};
use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 受保护路由（会话门卫）
///
/// 只检查本地是否存在 Token：存在则渲染商品目录，否则就地渲染登录页，
/// 不做任何跳转。服务端已失效的 Token 只能通过后续请求失败被发现，
/// 届时也只报告普通的请求错误（已知取舍）。
#[component]
fn Protected() -> impl IntoView {
    let session = use_session();

    move || {
        if session.is_authenticated() {
            view! { <HomePage /> }.into_any()
        } else {
            view! { <LoginPage /> }.into_any()
        }
    }
}

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Home => view! { <Protected /> }.into_any(),
        AppRoute::AdminCreate => view! {
            <AdminNav>
                <CreatePage />
            </AdminNav>
        }
        .into_any(),
        AppRoute::AdminList => view! {
            <AdminNav>
                <ProductListPage />
            </AdminNav>
        }
        .into_any(),
        AppRoute::AdminUpdate(id) => view! {
            <AdminNav>
                <UpdatePage id=id />
            </AdminNav>
        }
        .into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"页面未找到"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建会话上下文（从 LocalStorage 恢复 Token）
    let session = SessionContext::new();
    provide_context(session);

    // 2. 创建全局通知上下文
    let toast = ToastContext::new();
    provide_context(toast);

    view! {
        <ToastHost />
        <Router>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
