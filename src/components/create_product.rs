//! 创建商品页

use crate::api::ShopApi;
use crate::components::toast::use_toast;
use crate::forms::ProductDraft;
use crate::model::Category;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::time::Duration;

/// 预置占位图选项（显示名, URL）
const PRESET_IMAGES: [(&str, &str); 5] = [
    ("电子产品", "https://via.placeholder.com/400x300?text=Electronics"),
    ("家具", "https://via.placeholder.com/400x300?text=Furniture"),
    ("鞋类", "https://via.placeholder.com/400x300?text=Shoes"),
    ("服装", "https://via.placeholder.com/400x300?text=Clothes"),
    ("配饰", "https://via.placeholder.com/400x300?text=Accessories"),
];

/// 创建成功后跳转列表页前的停留时间，让通知展示片刻
const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

#[component]
pub fn CreatePage() -> impl IntoView {
    let toast = use_toast();
    let router = use_router();

    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (categories_loading, set_categories_loading) = signal(true);

    // 表单字段
    let title = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category_id = RwSignal::new(String::new());
    let image = RwSignal::new(String::new());

    // 挂载时拉取分类列表；失败只提示，表单其余部分仍可用
    let alive = StoredValue::new(true);
    on_cleanup(move || alive.set_value(false));

    spawn_local(async move {
        let result = ShopApi::get_categories().await;
        if alive.try_get_value() != Some(true) {
            return;
        }

        match result {
            Ok(data) => set_categories.set(data),
            Err(e) => {
                web_sys::console::error_1(&format!("加载分类失败: {}", e).into());
                toast.error("加载分类失败");
            }
        }
        set_categories_loading.set(false);
    });

    let reset_form = move || {
        title.set(String::new());
        price.set(String::new());
        description.set(String::new());
        // 与更新页不同，这里有意重置为非空默认值 "1"
        category_id.set("1".to_string());
        image.set(String::new());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = ProductDraft {
            title: title.get(),
            price: price.get(),
            description: description.get(),
            category_id: category_id.get(),
            image: image.get(),
        };
        // 校验失败不发起网络请求，草稿保留
        let payload = match draft.create_payload() {
            Ok(payload) => payload,
            Err(msg) => {
                toast.error(msg);
                return;
            }
        };

        spawn_local(async move {
            match ShopApi::create_product(&payload).await {
                Ok(_) => {
                    toast.success("商品创建成功");
                    reset_form();
                    // 稍等片刻再跳转到列表页
                    set_timeout(move || router.navigate("/admin/view"), REDIRECT_DELAY);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("创建商品失败: {}", e).into());
                    match e.status_code() {
                        Some(400) => {
                            let msg = e.server_message().unwrap_or("输入无效").to_string();
                            toast.error(msg);
                        }
                        Some(401) => toast.error("认证失败，请重新登录"),
                        _ => toast.error("创建商品失败，请重试"),
                    }
                }
            }
        });
    };

    let select_disabled =
        move || categories_loading.get() || categories.with(|c| c.is_empty());

    view! {
        <div class="p-4 md:p-8">
            <div class="card bg-base-100 shadow-xl max-w-2xl mx-auto">
                <form class="card-body space-y-2" on:submit=on_submit>
                    <h2 class="card-title">"新增商品"</h2>

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
                        <label class="label" for="category">
                            <span class="label-text">"分类"</span>
                        </label>
                        <select
                            id="category"
                            class="select select-bordered w-full"
                            disabled=select_disabled
                            on:change=move |ev| category_id.set(event_target_value(&ev))
                        >
                            <option value="" selected=move || category_id.get().is_empty()>
                                {move || {
                                    if categories_loading.get() {
                                        "加载分类中..."
                                    } else {
                                        "请选择分类"
                                    }
                                }}
                            </option>
                            <For
                                each=move || categories.get()
                                key=|c| c.id
                                children=move |cat| {
                                    let value = cat.id.to_string();
                                    let selected_value = value.clone();
                                    view! {
                                        <option
                                            value=value
                                            selected=move || category_id.get() == selected_value
                                        >
                                            {cat.name.clone()}
                                        </option>
                                    }
                                }
                            />
                        </select>
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
                        <label class="label" for="image">
                            <span class="label-text">"图片"</span>
                        </label>
                        // 预置图与自定义 URL 绑定同一个字段，后编辑者生效
                        <select
                            id="image"
                            class="select select-bordered w-full"
                            on:change=move |ev| image.set(event_target_value(&ev))
                        >
                            <option value="" selected=move || image.get().is_empty()>
                                "选择预置图或在下方输入自定义 URL"
                            </option>
                            {PRESET_IMAGES
                                .iter()
                                .map(|(label, url)| {
                                    let url = url.to_string();
                                    let selected_url = url.clone();
                                    view! {
                                        <option
                                            value=url
                                            selected=move || image.get() == selected_url
                                        >
                                            {*label}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                        <label class="label">
                            <span class="label-text-alt opacity-50">"或输入自定义图片 URL："</span>
                        </label>
                        <input
                            type="text"
                            placeholder="https://example.com/image.jpg"
                            on:input=move |ev| image.set(event_target_value(&ev))
                            prop:value=image
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="form-control">
                        <label class="label" for="description">
                            <span class="label-text">"描述（可选）"</span>
                        </label>
                        <textarea
                            id="description"
                            placeholder="请输入商品描述"
                            on:input=move |ev| description.set(event_target_value(&ev))
                            prop:value=description
                            class="textarea textarea-bordered w-full min-h-24"
                        ></textarea>
                    </div>

                    <div class="flex gap-2 mt-4">
                        <button type="submit" class="btn btn-primary flex-1">"创建商品"</button>
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
    }
}
