//! 管理后台导航壳

use crate::session::use_session;
use crate::web::router::use_router;
use leptos::prelude::*;

#[component]
pub fn AdminNav(children: Children) -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let on_logout = move |_| {
        session.logout();
        router.navigate("/login");
    };

    view! {
        <div class="min-h-screen flex flex-col bg-base-200">
            <div class="navbar bg-neutral text-neutral-content shadow-lg">
                <div class="flex-1">
                    <span class="text-xl font-bold px-2">"管理后台"</span>
                </div>
                <div class="flex-none gap-2">
                    <a class="btn btn-ghost btn-sm" on:click=move |_| router.navigate("/admin/create")>
                        "创建商品"
                    </a>
                    <a class="btn btn-ghost btn-sm" on:click=move |_| router.navigate("/admin/view")>
                        "商品管理"
                    </a>
                    <button class="btn btn-error btn-sm" on:click=on_logout>
                        "退出登录"
                    </button>
                </div>
            </div>
            <div class="flex-1">{children()}</div>
        </div>
    }
}
