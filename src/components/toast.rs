//! 全局通知模块
//!
//! 任何页面通过 Context 弹出一条消息，挂在 App 根部的宿主组件
//! 负责展示并在 3 秒后自动清除。

use leptos::prelude::*;

/// 通知内容与级别（消息内容, 是否出错）
type Toast = (String, bool);

/// 通知上下文
#[derive(Clone, Copy)]
pub struct ToastContext {
    current: RwSignal<Option<Toast>>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    /// 弹出成功通知
    pub fn success(&self, msg: impl Into<String>) {
        self.current.set(Some((msg.into(), false)));
    }

    /// 弹出失败通知
    pub fn error(&self, msg: impl Into<String>) {
        self.current.set(Some((msg.into(), true)));
    }
}

/// 从 Context 获取通知上下文
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext should be provided")
}

/// 通知宿主组件，应在 App 根部渲染一次
#[component]
pub fn ToastHost() -> impl IntoView {
    let current = use_toast().current;

    // 3 秒后清除通知
    Effect::new(move |_| {
        if current.get().is_some() {
            set_timeout(
                move || current.set(None),
                std::time::Duration::from_secs(3),
            );
        }
    });

    view! {
        <Show when=move || current.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    let (_, is_err) = current.get().unwrap();
                    if is_err {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    }
                }>
                    <span>{move || current.get().unwrap().0}</span>
                </div>
            </div>
        </Show>
    }
}
