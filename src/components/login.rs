//! 登录页

use crate::api::ShopApi;
use crate::components::toast::use_toast;
use crate::forms::LoginDraft;
use crate::session::use_session;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let toast = use_toast();
    let router = use_router();
    let session = use_session();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = LoginDraft {
            email: email.get(),
            password: password.get(),
        };
        let req = match draft.validate() {
            Ok(req) => req,
            Err(msg) => {
                toast.error(msg);
                return;
            }
        };

        spawn_local(async move {
            match ShopApi::login(&req).await {
                Ok(token) => {
                    session.login(token);
                    toast.success("登录成功");
                    router.navigate("/home");
                }
                // 不区分网络失败与凭据被拒，统一提示
                Err(e) => {
                    web_sys::console::error_1(&format!("登录失败: {}", e).into());
                    toast.error("邮箱或密码错误");
                }
            }
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"登录"</h1>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
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
                            <button type="submit" class="btn btn-primary">"登录"</button>
                        </div>
                        <p class="text-center text-sm mt-2">
                            "还没有账号？"
                            <a class="link link-primary" on:click=move |_| router.navigate("/")>
                                "去注册"
                            </a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
