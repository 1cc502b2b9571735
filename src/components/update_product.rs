//! 更新商品页

use crate::api::ShopApi;
use crate::components::toast::use_toast;
use crate::forms::{ProductDraft, UPDATE_FALLBACK_IMAGE};
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn UpdatePage(
    /// 路由参数：商品 ID
    id: i64,
) -> impl IntoView {
    let toast = use_toast();
    let router = use_router();

    let (loading, set_loading) = signal(true);
    let (saving, set_saving) = signal(false);
    // 行内错误（校验失败或提交失败时展示在表单顶部）
    let (error, set_error) = signal(Option::<String>::None);

    // 表单字段
    let title = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category_id = RwSignal::new(String::new());
    let image = RwSignal::new(UPDATE_FALLBACK_IMAGE.to_string());

    // 挂载时拉取单个商品并预填表单；卸载后丢弃迟到的响应
    let alive = StoredValue::new(true);
    on_cleanup(move || alive.set_value(false));

    spawn_local(async move {
        let result = ShopApi::get_product(id).await;
        if alive.try_get_value() != Some(true) {
            return;
        }

        match result {
            Ok(product) => {
                let draft = ProductDraft::from_product(&product);
                title.set(draft.title);
                price.set(draft.price);
                description.set(draft.description);
                category_id.set(draft.category_id);
                image.set(draft.image);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("加载商品失败: {}", e).into());
                set_error.set(Some("加载商品失败".to_string()));
                toast.error("加载商品失败");
            }
        }
        set_loading.set(false);
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let draft = ProductDraft {
            title: title.get(),
            price: price.get(),
            description: description.get(),
            category_id: category_id.get(),
            image: image.get(),
        };
        // 校验失败只展示行内错误，不发起请求
        let payload = match draft.update_payload() {
            Ok(payload) => payload,
            Err(msg) => {
                set_error.set(Some(msg.to_string()));
                return;
            }
        };

        set_saving.set(true);
        spawn_local(async move {
            match ShopApi::update_product(id, &payload).await {
                Ok(_) => {
                    toast.success("商品更新成功");
                    router.navigate("/admin/view");
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("更新商品失败: {}", e).into());
                    set_error.set(Some("更新商品失败".to_string()));
                    toast.error("更新商品失败");
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| {
                view! {
                    <div class="flex items-center justify-center py-24">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                        <span class="ml-3 opacity-60">"加载中..."</span>
                    </div>
                }
            }
        >
            <div class="p-4 md:p-8">
                <div class="card bg-base-100 shadow-xl max-w-2xl mx-auto">
                    <form class="card-body space-y-2" on:submit=on_submit>
                        <h2 class="card-title">"更新商品"</h2>

                        <Show when=move || error.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error.get().unwrap()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="title">
                                <span class="label-text">"标题"</span>
                            </label>
                            <input
                                id="title"
                                type="text"
                                placeholder="请输入商品标题"
                                on:input=move |ev| title.set(event_target_value(&ev))
                                prop:value=title
                                class="input input-bordered w-full"
                            />
                        </div>

                        <div class="form-control">
                            <label class="label" for="price">
                                <span class="label-text">"价格 ($)"</span>
                            </label>
                            <input
                                id="price"
                                type="number"
                                step="0.01"
                                placeholder="请输入商品价格"
                                on:input=move |ev| price.set(event_target_value(&ev))
                                prop:value=price
                                class="input input-bordered w-full"
                            />
                        </div>

                        <div class="form-control">
                            <label class="label" for="description">
                                <span class="label-text">"描述"</span>
                            </label>
                            <textarea
                                id="description"
                                placeholder="请输入商品描述"
                                on:input=move |ev| description.set(event_target_value(&ev))
                                prop:value=description
                                class="textarea textarea-bordered w-full min-h-24"
                            ></textarea>
                        </div>

                        <div class="form-control">
                            <label class="label" for="category_id">
                                <span class="label-text">"分类 ID"</span>
                            </label>
                            <input
                                id="category_id"
                                type="number"
                                on:input=move |ev| category_id.set(event_target_value(&ev))
                                prop:value=category_id
                                class="input input-bordered w-full"
                            />
                        </div>

                        <div class="form-control">
                            <label class="label" for="image">
                                <span class="label-text">"图片 URL"</span>
                            </label>
                            <input
                                id="image"
                                type="text"
                                placeholder="请输入图片 URL"
                                on:input=move |ev| image.set(event_target_value(&ev))
                                prop:value=image
                                class="input input-bordered w-full"
                            />
                        </div>

                        <div class="flex gap-2 mt-4">
                            <button
                                type="submit"
                                disabled=move || saving.get()
                                class="btn btn-primary flex-1"
                            >
                                {move || if saving.get() { "保存中..." } else { "更新商品" }}
                            </button>
                            <button
                                type="button"
                                class="btn btn-ghost flex-1"
                                on:click=move |_| router.navigate("/admin/view")
                            >
                                "取消"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
