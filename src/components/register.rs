//! 注册页

use crate::api::ShopApi;
use crate::components::toast::use_toast;
use crate::forms::RegisterDraft;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let toast = use_toast();
    let router = use_router();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = RegisterDraft {
            name: name.get(),
            email: email.get(),
            password: password.get(),
        };
        // 校验失败不发起网络请求，草稿保留
        let req = match draft.validate() {
            Ok(req) => req,
            Err(msg) => {
                toast.error(msg);
                return;
            }
        };

        spawn_local(async move {
            match ShopApi::create_user(&req).await {
                Ok(()) => {
                    toast.success("注册成功");
                    router.navigate("/login");
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("注册失败: {}", e).into());
                    toast.error("注册失败，请重试");
                }
            }
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"创建账号"</h1>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <div class="form-control">
                            <label class="label" for="name">
                                <span class="label-text">"姓名"</span>
                            </label>
                            <input
                                id="name"
                                type="text"
                                placeholder="请输入姓名"
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                prop:value=name
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"邮箱"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="请输入邮箱"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"密码"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="请输入密码"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button type="submit" class="btn btn-primary">"注册"</button>
                        </div>
                        <p class="text-center text-sm mt-2">
                            "已有账号？"
                            <a class="link link-primary" on:click=move |_| router.navigate("/login")>
                                "去登录"
                            </a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
