// web_app/components/common.rs - Reusable UI components
//
// Small, stateless pieces used by the catalog table and page.
// Everything is driven through props; no component here owns state.

use leptos::prelude::*;
use uuid::Uuid;

use crate::web_app::model::star_counts;
use crate::web_app::notify::{Notification, NotificationLevel, NotificationQueue};

/// Primary button component
///
/// A styled button with hover effects.
#[component]
pub fn Button(
    /// Button label text
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "px-6 py-2.5 bg-blue-600 text-white rounded-lg hover:bg-blue-700 \
                      transition-colors font-medium shadow-sm active:transform active:scale-95";

    view! {
        <button
            type="button"
            class=format!("{} {}", base_class, class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Star rating display component
///
/// Displays a star rating (0-5) with filled, half and empty stars.
#[component]
pub fn StarRating(
    /// The rating value (0.0 to 5.0)
    rating: f64,
) -> impl IntoView {
    let (full_stars, has_half, empty_stars) = star_counts(rating);

    view! {
        <div class="flex items-center gap-0.5" title=format!("Rating: {:.1}", rating)>
            {(0..full_stars).map(|_| view! {
                <span class="text-yellow-400">"★"</span>
            }).collect_view()}

            {has_half.then(|| view! {
                <div class="relative inline-block">
                    <span class="text-gray-200">"★"</span>
                    <span class="absolute top-0 left-0 overflow-hidden w-1/2 text-yellow-400">"★"</span>
                </div>
            })}

            {(0..empty_stars).map(|_| view! {
                <span class="text-gray-200">"★"</span>
            }).collect_view()}
        </div>
    }
}

/// Badge component
///
/// A small pill for labels such as the product category.
#[component]
pub fn Badge(children: Children) -> impl IntoView {
    view! {
        <span class="px-2.5 py-0.5 text-xs font-medium rounded-full bg-gray-100 text-gray-800 border border-gray-200 capitalize">
            {children()}
        </span>
    }
}

/// Stack of transient notifications, top-right
#[component]
pub fn ToastStack(
    /// Notifications currently on screen
    notifications: RwSignal<NotificationQueue>,
) -> impl IntoView {
    let dismiss = Callback::new(move |id: Uuid| {
        notifications.update(|queue| {
            queue.dismiss(id);
        });
    });

    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-3 w-80" aria-live="polite">
            <For
                each=move || notifications.with(|queue| queue.items().to_vec())
                key=|n| n.id
                children=move |notification| view! { <Toast notification=notification on_dismiss=dismiss /> }
            />
        </div>
    }
}

#[component]
fn Toast(notification: Notification, on_dismiss: Callback<Uuid>) -> impl IntoView {
    let id = notification.id;
    let class = toast_class(notification.level);

    view! {
        <div class=class role="alert">
            <span class="flex-1 text-sm font-medium">{notification.message}</span>
            <button
                class="text-current opacity-60 hover:opacity-100"
                title="Dismiss"
                on:click=move |_| on_dismiss.run(id)
            >
                "✕"
            </button>
        </div>
    }
}

pub fn toast_class(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Error => "flex items-start gap-3 p-4 rounded-xl shadow-lg border bg-red-50 border-red-200 text-red-800",
        NotificationLevel::Info => "flex items-start gap-3 p-4 rounded-xl shadow-lg border bg-blue-50 border-blue-200 text-blue-800",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_class_by_level() {
        assert!(toast_class(NotificationLevel::Error).contains("bg-red-50"));
        assert!(toast_class(NotificationLevel::Info).contains("bg-blue-50"));
    }
}
