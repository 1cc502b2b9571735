//! 商品管理列表页

use crate::api::ShopApi;
use crate::components::toast::use_toast;
use crate::model::Product;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 删除前的确认弹窗
fn confirm_delete() -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message("确定要删除该商品吗？").unwrap_or(false))
        .unwrap_or(false)
}

#[component]
pub fn ProductListPage() -> impl IntoView {
    let toast = use_toast();
    let router = use_router();

    let (products, set_products) = signal(Vec::<Product>::new());
    let (loading, set_loading) = signal(true);

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
                toast.error("加载商品失败");
            }
        }
        set_loading.set(false);
    });

    let handle_delete = move |id: i64| {
        if !confirm_delete() {
            return;
        }

        spawn_local(async move {
            match ShopApi::delete_product(id).await {
                Ok(()) => {
                    // 只从本地列表移除被删除的那一行，不重新拉取
                    set_products.update(|list| list.retain(|p| p.id != id));
                    toast.success("商品已删除");
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("删除商品失败: {}", e).into());
                    toast.error("删除商品失败");
                }
            }
        });
    };

    let is_empty = move || products.with(|p| p.is_empty());

    view! {
        <div class="p-4 md:p-8 max-w-7xl mx-auto w-full">
            <div class="flex items-center justify-between mb-6">
                <h1 class="text-2xl font-bold">"商品管理"</h1>
                <button
                    class="btn btn-success btn-sm"
                    on:click=move |_| router.navigate("/admin/create")
                >
                    "+ 新增商品"
                </button>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"图片"</th>
                                <th>"标题"</th>
                                <th>"分类"</th>
                                <th>"价格"</th>
                                <th>"操作"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || loading.get()>
                                <tr>
                                    <td colspan="5" class="text-center py-8 opacity-50">
                                        <span class="loading loading-spinner loading-md"></span>
                                        " 加载中..."
                                    </td>
                                </tr>
                            </Show>
                            <Show when=move || !loading.get() && is_empty()>
                                <tr>
                                    <td colspan="5" class="text-center py-8 opacity-50">
                                        "暂无商品"
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=move || products.get()
                                key=|p| p.id
                                children=move |product| {
                                    let id = product.id;
                                    let image = product.display_image().to_string();
                                    let category = product.category_name().to_string();
                                    view! {
                                        <tr>
                                            <td class="w-20">
                                                <img
                                                    src=image
                                                    alt=product.title.clone()
                                                    class="w-14 h-14 object-cover rounded"
                                                />
                                            </td>
                                            <td class="max-w-xs">
                                                <div class="truncate">{product.title.clone()}</div>
                                            </td>
                                            <td>{category}</td>
                                            <td>{format!("${}", product.price)}</td>
                                            <td class="whitespace-nowrap">
                                                <button
                                                    class="btn btn-primary btn-xs mr-2"
                                                    on:click=move |_| {
                                                        router.navigate(&format!("/admin/update/{}", id))
                                                    }
                                                >
                                                    "编辑"
                                                </button>
                                                <button
                                                    class="btn btn-error btn-xs"
                                                    on:click=move |_| handle_delete(id)
                                                >
                                                    "删除"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
