#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::Callback;
use zodiac_core::schema::CollectionEntry;
use zodiac_core::{DeleteTarget, NoticeId, NotificationCenter, Page, ResourceKind, ResourceList};
use zodiac_web::app::view::AppHandlers;
use zodiac_web::components::daisy_ui::Toast;
use zodiac_web::components::daisy_ui::toast::ToastProps;
use zodiac_web::components::nav_bar::{NavBar, NavBarProps};
use zodiac_web::components::resource_list::{ResourceListView, ResourceListViewProps};
use zodiac_web::dom;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_point(id: &str) -> web_sys::Element {
    let doc = dom::document();
    let root = doc.create_element("div").unwrap();
    root.set_id(id);
    doc.body().unwrap().append_child(&root).unwrap();
    root
}

#[wasm_bindgen_test]
fn page_title_reaches_the_tab() {
    dom::set_page_title("🎫 Tickets");
    assert_eq!(dom::document().title(), "🎫 Tickets · Zodiac admin");
}

#[wasm_bindgen_test]
async fn nav_click_reports_section() {
    let root = mount_point("nav-test");
    let clicked: Rc<RefCell<Option<Page>>> = Rc::default();
    let sink = clicked.clone();
    yew::Renderer::<NavBar>::with_root_and_props(
        root.clone(),
        NavBarProps {
            current: Page::Dashboard,
            on_navigate: Callback::from(move |page| *sink.borrow_mut() = Some(page)),
        },
    )
    .render();
    yew::platform::time::sleep(std::time::Duration::from_millis(10)).await;

    let buttons = root.query_selector_all("button").unwrap();
    assert_eq!(buttons.length() as usize, Page::nav().len());
    let scheduler = buttons
        .item(6)
        .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .expect("scheduler button");
    scheduler.click();
    assert_eq!(*clicked.borrow(), Some(Page::Scheduler));
}

fn click_button(root: &web_sys::Element, label: &str) {
    let buttons = root.query_selector_all("button").unwrap();
    let button = (0..buttons.length())
        .filter_map(|i| buttons.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .find(|el| el.text_content().unwrap_or_default().contains(label))
        .expect("button present");
    button.click();
}

#[wasm_bindgen_test]
async fn row_controls_do_not_open_the_row() {
    let root = mount_point("list-test");
    let navigated: Rc<RefCell<Vec<Page>>> = Rc::default();
    let toggled: Rc<RefCell<Vec<String>>> = Rc::default();
    let deleted: Rc<RefCell<Vec<DeleteTarget>>> = Rc::default();
    let handlers = AppHandlers {
        navigate: {
            let sink = navigated.clone();
            Callback::from(move |page| sink.borrow_mut().push(page))
        },
        toggle: {
            let sink = toggled.clone();
            Callback::from(move |(_, key): (ResourceKind, String)| sink.borrow_mut().push(key))
        },
        request_delete: {
            let sink = deleted.clone();
            Callback::from(move |target| sink.borrow_mut().push(target))
        },
        ..AppHandlers::default()
    };
    let list = ResourceList::from_entries(
        ResourceKind::Quiz,
        vec![CollectionEntry {
            key: "2025-01-10".into(),
            title: Some("Morning quiz".into()),
            starts_at_msk: None,
            enabled: true,
        }],
    );
    yew::Renderer::<ResourceListView>::with_root_and_props(
        root.clone(),
        ResourceListViewProps {
            list,
            pending: Vec::new(),
            handlers,
        },
    )
    .render();
    yew::platform::time::sleep(std::time::Duration::from_millis(10)).await;

    click_button(&root, "Disable");
    click_button(&root, "Delete");
    assert_eq!(toggled.borrow().as_slice(), ["2025-01-10"]);
    assert_eq!(deleted.borrow().len(), 1);
    assert!(navigated.borrow().is_empty());

    let cell = root
        .query_selector("tbody td")
        .unwrap()
        .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .expect("first cell");
    cell.click();
    assert_eq!(
        navigated.borrow().as_slice(),
        [Page::QuizDetail("2025-01-10".into())]
    );
}

#[wasm_bindgen_test]
async fn toast_timer_expires_instead_of_dismissing() {
    let root = mount_point("toast-test");
    let mut center = NotificationCenter::new(20);
    let id = center.success("saved");
    let expired: Rc<RefCell<Vec<NoticeId>>> = Rc::default();
    let dismissed: Rc<RefCell<Vec<NoticeId>>> = Rc::default();
    let on_expire = {
        let sink = expired.clone();
        Callback::from(move |id| sink.borrow_mut().push(id))
    };
    let on_dismiss = {
        let sink = dismissed.clone();
        Callback::from(move |id| sink.borrow_mut().push(id))
    };
    yew::Renderer::<Toast>::with_root_and_props(
        root,
        ToastProps {
            notices: center.notices().to_vec(),
            class: yew::Classes::new(),
            on_dismiss,
            on_expire,
        },
    )
    .render();
    yew::platform::time::sleep(std::time::Duration::from_millis(80)).await;

    assert_eq!(expired.borrow().as_slice(), [id]);
    assert!(dismissed.borrow().is_empty());
}
