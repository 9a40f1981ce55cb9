//! Storage maintenance panel.
//!
//! Manual entry point for the cleanup, reset, snapshot and migration
//! operations. The service is passed in by the caller rather than reached
//! through a global.

use civic_id_frontend_common::hooks::{use_toast, BrowserMaintenance};
use civic_id_frontend_common::storage::{StorageSnapshot, StoredValue, UserId};
use std::rc::Rc;
use tracing::{error, info};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct StorageAdminPanelProps {
    pub maintenance: Rc<BrowserMaintenance>,
}

impl PartialEq for StorageAdminPanelProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.maintenance, &other.maintenance)
    }
}

#[function_component(StorageAdminPanel)]
pub fn storage_admin_panel(props: &StorageAdminPanelProps) -> Html {
    let toast = use_toast();
    let user_id = use_state(String::new);
    let snapshot = use_state(|| None::<StorageSnapshot>);

    let on_cleanup = {
        let maintenance = props.maintenance.clone();
        let toast = toast.clone();
        let snapshot = snapshot.clone();
        Callback::from(move |_: MouseEvent| {
            if maintenance.cleanup_all_app_data() {
                toast.show_success("All app data cleared");
                snapshot.set(None);
            } else {
                toast.show_error("Failed to clear app data");
            }
        })
    };

    let on_reset = {
        let maintenance = props.maintenance.clone();
        let toast = toast.clone();
        let snapshot = snapshot.clone();
        Callback::from(move |_: MouseEvent| {
            if maintenance.reset_all_notification_data() {
                toast.show_success("Notification data reset");
                snapshot.set(None);
            } else {
                toast.show_error("Failed to reset notification data");
            }
        })
    };

    let on_inspect = {
        let maintenance = props.maintenance.clone();
        let toast = toast.clone();
        let snapshot = snapshot.clone();
        Callback::from(move |_: MouseEvent| match maintenance.debug_all_local_storage_data() {
            Some(current) => {
                toast.show_info(format!("{} keys in storage", current.len()));
                snapshot.set(Some(current));
            }
            None => {
                toast.show_error("Failed to read storage");
            }
        })
    };

    let on_user_id_input = {
        let user_id = user_id.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            user_id.set(input.value());
        })
    };

    let on_migrate = {
        let maintenance = props.maintenance.clone();
        let toast = toast.clone();
        let user_id = user_id.clone();
        Callback::from(move |_: MouseEvent| {
            let id = UserId::parse(&user_id);
            match maintenance.try_migrate_user_notification_data(id.clone()) {
                Ok(report) if report.any_migrated() => {
                    info!(user_id = %id, migrated = report.migrated.len(), "Migrated notification data");
                    toast.show_success(format!(
                        "Migrated {} notification list(s) for user {id}",
                        report.migrated.len()
                    ));
                }
                Ok(report) if !report.skipped.is_empty() => {
                    toast.show_warning(format!(
                        "Skipped {} unreadable record(s) for user {id}",
                        report.skipped.len()
                    ));
                }
                Ok(_) => {
                    toast.show_info(format!("Nothing to migrate for user {id}"));
                }
                Err(e) => {
                    error!("Migration failed: {e}");
                    toast.show_error(format!("Migration failed: {e}"));
                }
            }
        })
    };

    html! {
        <div class="p-6 max-w-6xl mx-auto">
            <div class="bg-white dark:bg-gray-800 rounded-lg shadow-lg">
                <div class="border-b border-gray-200 dark:border-gray-700 px-6 py-4">
                    <h2 class="text-xl font-semibold text-gray-800 dark:text-gray-200">
                        {"Client Storage"}
                    </h2>
                    <p class="text-sm text-gray-600 dark:text-gray-400 mt-1">
                        {"Inspect, clean up and migrate data kept in this browser"}
                    </p>
                </div>

                <div class="p-6 space-y-6">
                    <div class="flex flex-wrap gap-3">
                        <button onclick={on_inspect} class={BUTTON_NEUTRAL}>
                            {"Inspect storage"}
                        </button>
                        <button onclick={on_reset} class={BUTTON_WARNING}>
                            {"Reset notifications"}
                        </button>
                        <button onclick={on_cleanup} class={BUTTON_DANGER}>
                            {"Clear all app data"}
                        </button>
                    </div>

                    <div class="flex items-end gap-3">
                        <label class="flex-1">
                            <span class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                                {"User ID"}
                            </span>
                            <input
                                type="text"
                                value={(*user_id).clone()}
                                oninput={on_user_id_input}
                                placeholder="e.g. 42"
                                class="w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-700 text-gray-900 dark:text-gray-100"
                            />
                        </label>
                        <button
                            onclick={on_migrate}
                            disabled={user_id.trim().is_empty()}
                            class={BUTTON_PRIMARY}
                        >
                            {"Migrate notifications"}
                        </button>
                    </div>

                    if let Some(current) = &*snapshot {
                        <SnapshotView snapshot={current.clone()} />
                    }
                </div>
            </div>
        </div>
    }
}

const BUTTON_NEUTRAL: &str = "px-4 py-2 text-sm font-medium text-gray-700 dark:text-gray-300 bg-gray-100 dark:bg-gray-700 hover:bg-gray-200 dark:hover:bg-gray-600 rounded-lg transition-colors";
const BUTTON_WARNING: &str = "px-4 py-2 text-sm font-medium text-white bg-yellow-600 hover:bg-yellow-700 rounded-lg transition-colors";
const BUTTON_DANGER: &str = "px-4 py-2 text-sm font-medium text-white bg-red-600 hover:bg-red-700 rounded-lg transition-colors";
const BUTTON_PRIMARY: &str = "px-4 py-2 text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400 rounded-lg transition-colors";

#[derive(Properties, Clone, PartialEq)]
struct SnapshotViewProps {
    snapshot: StorageSnapshot,
}

#[function_component(SnapshotView)]
fn snapshot_view(props: &SnapshotViewProps) -> Html {
    let snapshot = &props.snapshot;

    if snapshot.is_empty() {
        return html! {
            <p class="text-sm text-gray-500 dark:text-gray-400">{"Storage is empty"}</p>
        };
    }

    let as_json = serde_json::to_string_pretty(snapshot).unwrap_or_default();

    html! {
        <div class="space-y-4">
            <table class="w-full text-sm">
                <thead>
                    <tr class="text-left text-gray-600 dark:text-gray-400">
                        <th class="py-2 pr-4">{"Key"}</th>
                        <th class="py-2">{"Value"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for snapshot.entries.iter().map(|(key, value)| {
                        let highlight = snapshot.notification_entries.contains_key(key);
                        entry_row(key, value, highlight)
                    }) }
                </tbody>
            </table>
            <details>
                <summary class="cursor-pointer text-sm text-gray-600 dark:text-gray-400">
                    {"Raw JSON"}
                </summary>
                <pre class="mt-2 p-3 bg-gray-100 dark:bg-gray-900 rounded text-xs overflow-x-auto">
                    {as_json}
                </pre>
            </details>
        </div>
    }
}

fn entry_row(key: &str, value: &StoredValue, highlight: bool) -> Html {
    let row_class = if highlight {
        "border-t border-gray-200 dark:border-gray-700 bg-blue-50 dark:bg-blue-900/20"
    } else {
        "border-t border-gray-200 dark:border-gray-700"
    };
    let value_class = if value.is_raw() {
        "py-2 font-mono text-gray-500 dark:text-gray-400 italic break-all"
    } else {
        "py-2 font-mono text-gray-800 dark:text-gray-200 break-all"
    };

    html! {
        <tr class={row_class}>
            <td class="py-2 pr-4 font-mono text-gray-800 dark:text-gray-200">{key}</td>
            <td class={value_class}>{value.to_string()}</td>
        </tr>
    }
}
