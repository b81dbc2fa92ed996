//! Activity List entry point
//!
//! Hydrates the store, wires the page's form and list, and re-renders after
//! every change.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement};

    use activity_list::consts::*;
    use activity_list::persistence::KeyValueStorage;
    use activity_list::{ActivityForm, ActivityListStore, ActivityType, StoreConfig, platform, view};

    /// Page state: the store plus whatever is typed into the form
    struct App {
        store: ActivityListStore<Box<dyn KeyValueStorage>>,
        form: ActivityForm,
    }

    impl App {
        /// Rebuild the summary line, the unsaved-changes notice and the list
        fn render_list(&self, document: &Document) {
            if let Some(el) = document.get_element_by_id("summary") {
                el.set_text_content(Some(&view::summary(self.store.count())));
            }
            if let Some(el) = document.get_element_by_id("sync-status") {
                let class = if self.store.is_synced() { "hidden" } else { "" };
                let _ = el.set_attribute("class", class);
            }

            let Some(list) = document.get_element_by_id("activity-list") else {
                return;
            };
            list.set_inner_html("");

            for (index, record) in self.store.items().iter().enumerate() {
                let Some(item) = list_item(document, index, &view::list_line(record)) else {
                    continue;
                };
                let _ = list.append_child(&item);
            }
        }

        /// Push the form state back into the inputs (after a reset)
        fn render_form(&self, document: &Document) {
            let form = &self.form;
            if let Some(input) = element::<HtmlInputElement>(document, "activity-input") {
                input.set_value(&form.activity);
            }
            if let Some(input) = element::<HtmlInputElement>(document, "price-input") {
                input.set_value(&view::format_number(form.price));
            }
            if let Some(select) = element::<HtmlSelectElement>(document, "type-select") {
                select.set_value(form.kind.as_str());
            }
            if let Some(input) = element::<HtmlInputElement>(document, "booking-input") {
                input.set_checked(form.booking_required);
            }
            if let Some(input) = element::<HtmlInputElement>(document, "accessibility-input") {
                input.set_value(&view::format_number(form.accessibility));
            }
            render_accessibility_label(document, form.accessibility);
        }
    }

    fn element<T: JsCast>(document: &Document, id: &str) -> Option<T> {
        document.get_element_by_id(id)?.dyn_into::<T>().ok()
    }

    fn render_accessibility_label(document: &Document, value: f64) {
        if let Some(el) = document.get_element_by_id("accessibility-value") {
            el.set_text_content(Some(&view::accessibility_label(value)));
        }
    }

    /// `<li class="list-item"><span>..</span><button class="delete-btn" data-index=..>`
    fn list_item(document: &Document, index: usize, text: &str) -> Option<Element> {
        let item = document.create_element("li").ok()?;
        let _ = item.set_attribute("class", "list-item");

        let label = document.create_element("span").ok()?;
        label.set_text_content(Some(text));
        let _ = item.append_child(&label);

        let button = document.create_element("button").ok()?;
        let _ = button.set_attribute("class", "delete-btn");
        let _ = button.set_attribute("data-index", &index.to_string());
        button.set_text_content(Some("Delete"));
        let _ = item.append_child(&button);

        Some(item)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Activity List starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let (store, hydration) =
            ActivityListStore::open(platform::default_storage(), StoreConfig::default());
        log::info!("Store ready: {:?}", hydration);

        if let Some(title) = document.get_element_by_id("title") {
            title.set_text_content(Some(view::TITLE));
        }
        populate_type_select(&document);
        configure_accessibility_slider(&document);

        let app = Rc::new(RefCell::new(App {
            store,
            form: ActivityForm::default(),
        }));
        {
            let app = app.borrow();
            app.render_form(&document);
            app.render_list(&document);
        }

        setup_input_handlers(&document, app.clone());
        setup_submit_handler(&document, app.clone());
        setup_delete_handler(&document, app);

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        log::info!("Activity List running!");
    }

    fn populate_type_select(document: &Document) {
        let Some(select) = document.get_element_by_id("type-select") else {
            log::warn!("No #type-select on the page");
            return;
        };
        select.set_inner_html("");
        for kind in ActivityType::all() {
            if let Ok(option) = document.create_element("option") {
                let _ = option.set_attribute("value", kind.as_str());
                option.set_text_content(Some(kind.as_str()));
                let _ = select.append_child(&option);
            }
        }
    }

    fn configure_accessibility_slider(document: &Document) {
        if let Some(input) = element::<HtmlInputElement>(document, "accessibility-input") {
            input.set_min(&ACCESSIBILITY_MIN.to_string());
            input.set_max(&ACCESSIBILITY_MAX.to_string());
            input.set_step(&ACCESSIBILITY_STEP.to_string());
        }
    }

    /// Listen on `id` for `event` and feed the element into `update`
    fn on_field<T, F>(
        document: &Document,
        id: &str,
        event: &str,
        app: Rc<RefCell<App>>,
        update: F,
    ) where
        T: JsCast + Clone + 'static,
        F: Fn(&mut App, &T) + 'static,
    {
        let Some(field) = element::<T>(document, id) else {
            log::warn!("No #{} on the page", id);
            return;
        };
        let target = field.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            update(&mut *app.borrow_mut(), &target);
        });
        let _ = field
            .unchecked_ref::<web_sys::EventTarget>()
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_input_handlers(document: &Document, app: Rc<RefCell<App>>) {
        on_field::<HtmlInputElement, _>(
            document,
            "activity-input",
            "input",
            app.clone(),
            |app, input| {
                app.form.set_activity(&input.value());
            },
        );
        on_field::<HtmlInputElement, _>(
            document,
            "price-input",
            "input",
            app.clone(),
            |app, input| {
                app.form.set_price_input(&input.value());
            },
        );
        on_field::<HtmlSelectElement, _>(
            document,
            "type-select",
            "change",
            app.clone(),
            |app, select| {
                app.form.set_type_input(&select.value());
            },
        );
        on_field::<HtmlInputElement, _>(
            document,
            "booking-input",
            "change",
            app.clone(),
            |app, input| {
                app.form.set_booking_required(input.checked());
            },
        );
        on_field::<HtmlInputElement, _>(
            document,
            "accessibility-input",
            "input",
            app,
            |app, input| {
                app.form.set_accessibility_input(&input.value());
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    render_accessibility_label(&document, app.form.accessibility);
                }
            },
        );
    }

    fn setup_submit_handler(document: &Document, app: Rc<RefCell<App>>) {
        let Some(form) = document.get_element_by_id("activity-form") else {
            log::warn!("No #activity-form on the page");
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            event.prevent_default();
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            let mut guard = app.borrow_mut();
            let App { store, form } = &mut *guard;
            // A rejected candidate leaves the form as typed
            if form.submit(store).is_ok() {
                guard.render_form(&document);
                guard.render_list(&document);
            }
        });
        let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One delegated click listener for every row's Delete button
    fn setup_delete_handler(document: &Document, app: Rc<RefCell<App>>) {
        let Some(list) = document.get_element_by_id("activity-list") else {
            log::warn!("No #activity-list on the page");
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            let Some(button) = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest("button.delete-btn").ok().flatten())
            else {
                return;
            };
            let Some(index) = button
                .get_attribute("data-index")
                .and_then(|i| i.parse::<usize>().ok())
            else {
                return;
            };

            let mut app = app.borrow_mut();
            match app.store.remove(index) {
                Ok(removed) => log::info!("Removed '{}'", removed.activity),
                Err(e) => log::warn!("Delete ignored: {e}"),
            }
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                app.render_list(&document);
            }
        });
        let _ = list.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Activity List (native) starting...");
    log::info!("Native mode has no UI - run with `trunk serve` for the web version");

    let (store, hydration) = activity_list::ActivityListStore::open(
        activity_list::platform::default_storage(),
        activity_list::StoreConfig::default(),
    );
    log::info!("In-memory store ready: {:?}", hydration);
    println!("{}", activity_list::view::summary(store.count()));
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
