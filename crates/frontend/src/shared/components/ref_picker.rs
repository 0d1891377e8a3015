use contracts::common::EntityRef;
use leptos::prelude::*;

use crate::shared::components::ui::Checkbox;
use crate::shared::list_utils::{filter_list, sort_list};

/// Checkbox multi-select over entity references (a trade's categories, a
/// service's trades, ...). Options are loaded by the owning form; the
/// filter only narrows what is already on screen.
#[component]
pub fn RefPicker(
    #[prop(into)] label: Signal<String>,
    #[prop(into)] options: Signal<Vec<EntityRef>>,
    selected: RwSignal<Vec<i64>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let (filter, set_filter) = signal(String::new());

    let visible = move || {
        let mut items = filter_list(options.get(), &filter.get());
        sort_list(&mut items, "name", true);
        items
    };

    let toggle = move |id: i64, checked: bool| {
        selected.update(|s| {
            if checked {
                if !s.contains(&id) {
                    s.push(id);
                }
            } else {
                s.retain(|existing| *existing != id);
            }
        });
    };

    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                type="text"
                class="form__input ref-picker__filter"
                placeholder="Filter..."
                prop:value=move || filter.get()
                on:input=move |ev| set_filter.set(event_target_value(&ev))
            />
            <div class="ref-picker">
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="ref-picker__loading">"Loading..."</div> }
                >
                    <For
                        each=visible
                        key=|r| r.id
                        children=move |r: EntityRef| {
                            let id = r.id;
                            let checked = Signal::derive(move || selected.get().contains(&id));
                            view! {
                                <Checkbox
                                    label=r.name.clone()
                                    checked=checked
                                    on_change=Callback::new(move |checked: bool| toggle(id, checked))
                                />
                            }
                        }
                    />
                </Show>
            </div>
            {move || error.get().map(|e| view! { <span class="form__error">{e}</span> })}
        </div>
    }
}
