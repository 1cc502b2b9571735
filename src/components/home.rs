//! 商品目录浏览页（只读）

use crate::api::ShopApi;
use crate::model::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 卡片上的描述截断长度
const DESCRIPTION_PREVIEW_CHARS: usize = 100;

#[component]
pub fn HomePage() -> impl IntoView {
    let (products, set_products) = signal(Vec::<Product>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    // 挂载时拉取一次；页面卸载后丢弃迟到的响应
    let alive = StoredValue::new(true);
    on_cleanup(move || alive.set_value(false));

    spawn_local(async move {
        let result = ShopApi::get_products().await;
        if alive.try_get_value() != Some(true) {
            return;
        }

        match result {
            Ok(data) => set_products.set(data),
            Err(e) => {
                web_sys::console::error_1(&format!("加载商品失败: {}", e).into());
                set_error.set(Some("加载商品失败".to_string()));
            }
        }
        set_loading.set(false);
    });

    view! {
        <div class="min-h-screen bg-base-200">
            <header class="bg-neutral text-neutral-content py-10 text-center">
                <h1 class="text-3xl font-bold">"商品目录"</h1>
                <p class="opacity-70 mt-2">"浏览我们的精选商品"</p>
            </header>

            <Show when=move || loading.get()>
                <div class="flex justify-center py-16">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            </Show>

            // 终态错误：本次挂载内不再展示加载或数据
            <Show when=move || error.get().is_some()>
                <div class="text-center py-16 text-error text-lg">
                    {move || error.get().unwrap()}
                </div>
            </Show>

            <Show when=move || !loading.get() && error.get().is_none()>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-5 p-5 max-w-7xl mx-auto">
                    <For
                        each=move || products.get()
                        key=|p| p.id
                        children=move |product| {
                            let image = product.display_image().to_string();
                            let category = product.category_name().to_string();
                            let preview: String = product
                                .description
                                .chars()
                                .take(DESCRIPTION_PREVIEW_CHARS)
                                .collect();
                            view! {
                                <div class="card bg-base-100 shadow-md">
                                    <figure class="h-48 bg-base-300">
                                        <img
                                            src=image
                                            alt=product.title.clone()
                                            class="object-cover w-full h-full"
                                        />
                                    </figure>
                                    <div class="card-body p-4">
                                        <h3 class="card-title text-base">{product.title.clone()}</h3>
                                        <p class="text-xs uppercase opacity-60">{category}</p>
                                        <p class="text-sm opacity-70">{format!("{}...", preview)}</p>
                                        <div class="card-actions justify-end">
                                            <span class="text-lg font-bold text-primary">
                                                {format!("${}", product.price)}
                                            </span>
                                        </div>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
