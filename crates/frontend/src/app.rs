use crate::admin::StorageAdminPanel;
use civic_id_frontend_common::hooks::use_storage_maintenance;
use civic_id_frontend_common::ToastProvider;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <AppContent />
        </ToastProvider>
    }
}

#[function_component(AppContent)]
fn app_content() -> Html {
    let maintenance = use_storage_maintenance();

    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900">
            <header class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
                <div class="max-w-6xl mx-auto p-4 flex items-center gap-3">
                    <h1 class="text-xl font-bold text-blue-700 dark:text-blue-400">
                        {"Civic ID"}
                    </h1>
                    <span class="text-sm text-gray-500 dark:text-gray-400">{"Maintenance"}</span>
                </div>
            </header>
            <main>
                <StorageAdminPanel {maintenance} />
            </main>
        </div>
    }
}
