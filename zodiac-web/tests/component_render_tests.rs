use futures::executor::block_on;
use std::collections::BTreeMap;
use yew::html::ChildrenRenderer;
use yew::{AttrValue, Callback, LocalServerRenderer};
use zodiac_core::detail::quiz_detail;
use zodiac_core::schema::{CollectionEntry, QuizMeta, QuizQuestion, QuizQuestions, QuizStats};
use zodiac_core::{
    ActionId, ActionTag, Confirmation, DeleteTarget, ErrorPanel, ModalForm, NotificationCenter,
    Page, Pager, ResourceKind, ResourceList, ValidationError,
};
use zodiac_web::app::view::AppHandlers;
use zodiac_web::components::confirm_dialog::{ConfirmDialog, ConfirmDialogProps};
use zodiac_web::components::daisy_ui::modal::ModalProps;
use zodiac_web::components::daisy_ui::pagination::PaginationProps;
use zodiac_web::components::daisy_ui::toast::ToastProps;
use zodiac_web::components::daisy_ui::{Modal, Pagination, Toast};
use zodiac_web::components::detail_panel::{DetailPanel, DetailPanelProps};
use zodiac_web::components::error_panel::{ErrorPanelView, ErrorPanelViewProps};
use zodiac_web::components::form_modal::{FormModal, FormModalProps};
use zodiac_web::components::nav_bar::{NavBar, NavBarProps};
use zodiac_web::components::resource_list::{ResourceListView, ResourceListViewProps};

fn quizzes() -> ResourceList {
    ResourceList::from_entries(
        ResourceKind::Quiz,
        vec![
            CollectionEntry {
                key: "2025-01-10".into(),
                title: Some("Morning quiz".into()),
                starts_at_msk: Some("10.01.2025 12:00".into()),
                enabled: true,
            },
            CollectionEntry {
                key: "2025-01-11".into(),
                title: None,
                starts_at_msk: None,
                enabled: false,
            },
        ],
    )
}

#[test]
fn modal_renders_when_open_and_skips_when_closed() {
    let open_props = ModalProps {
        open: true,
        title: AttrValue::from("Title"),
        id: Some(AttrValue::from("edit-meta-modal")),
        description: Some(AttrValue::from("Desc")),
        actions: None,
        class: yew::Classes::new(),
        busy: false,
        on_close: Callback::noop(),
        children: ChildrenRenderer::default(),
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(open_props.clone()).render());
    assert!(html.contains("edit-meta-modal"));
    assert!(html.contains("Desc"));
    assert!(html.contains("modal-backdrop"));

    let closed = ModalProps {
        open: false,
        ..open_props
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(closed).render());
    assert!(!html.contains("modal-backdrop"));
}

#[test]
fn toast_shows_each_notice_with_its_style() {
    let mut center = NotificationCenter::default();
    center.success("Quiz 2025-01-10 disabled");
    center.error("Scheduler is not running");
    let props = ToastProps {
        notices: center.notices().to_vec(),
        class: yew::Classes::new(),
        on_dismiss: Callback::noop(),
        on_expire: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Toast>::with_props(props).render());
    assert!(html.contains("alert-success"));
    assert!(html.contains("alert-error"));
    assert!(html.contains("Quiz 2025-01-10 disabled"));
    assert!(html.contains("Scheduler is not running"));
    assert!(html.contains("aria-live=\"polite\""));
}

#[test]
fn resource_list_renders_labels_and_toggle_controls() {
    let props = ResourceListViewProps {
        list: quizzes(),
        pending: Vec::new(),
        handlers: AppHandlers::default(),
    };
    let html = block_on(LocalServerRenderer::<ResourceListView>::with_props(props).render());
    assert!(html.contains("2025-01-10 — Morning quiz"));
    assert!(html.contains("⏸️ Disable"));
    assert!(html.contains("✅ Enable"));
    assert!(html.contains("🗑️ Delete"));
    assert!(html.contains("➕ New quiz"));
    assert!(html.contains("2 of 2"));
}

#[test]
fn filtered_list_shows_only_matches() {
    let mut list = quizzes();
    list.set_query("morning");
    let props = ResourceListViewProps {
        list,
        pending: Vec::new(),
        handlers: AppHandlers::default(),
    };
    let html = block_on(LocalServerRenderer::<ResourceListView>::with_props(props).render());
    assert!(html.contains("Morning quiz"));
    assert!(!html.contains("2025-01-11"));
    assert!(html.contains("1 of 2"));
}

#[test]
fn pending_toggle_disables_its_button() {
    let props = ResourceListViewProps {
        list: quizzes(),
        pending: vec![ActionId::new(
            ResourceKind::Quiz,
            "2025-01-10",
            ActionTag::Toggle,
        )],
        handlers: AppHandlers::default(),
    };
    let html = block_on(LocalServerRenderer::<ResourceListView>::with_props(props).render());
    assert_eq!(html.matches("aria-busy=\"true\"").count(), 1);
}

#[test]
fn pending_delete_disables_only_its_button() {
    let props = ResourceListViewProps {
        list: quizzes(),
        pending: vec![
            ActionId::new(ResourceKind::Quiz, "2025-01-10", ActionTag::Delete),
            ActionId::new(ResourceKind::Quiz, "2025-01-10", ActionTag::Toggle),
        ],
        handlers: AppHandlers::default(),
    };
    let html = block_on(LocalServerRenderer::<ResourceListView>::with_props(props).render());
    assert_eq!(html.matches("aria-busy=\"true\"").count(), 2);
    assert!(html.contains("cursor-pointer"));
}

#[test]
fn form_modal_shows_field_and_backend_errors() {
    let mut form = ModalForm::quiz_question("2025-01-10", None);
    form.apply_validation_error(&ValidationError::new(
        "option_2",
        "Option 2 must not be empty",
    ));
    form.error = Some("Quiz not found".into());
    let props = FormModalProps {
        form,
        busy: false,
        on_input: Callback::noop(),
        on_submit: Callback::noop(),
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<FormModal>::with_props(props).render());
    assert!(html.contains("quiz-question-modal"));
    assert!(html.contains("Option 2 must not be empty"));
    assert!(html.contains("Quiz not found"));
    assert!(html.contains("correct_answer"));
    assert!(html.contains("💾 Save"));
}

#[test]
fn confirm_dialog_renders_prompt_only_when_asked() {
    let target = DeleteTarget::Resource {
        kind: ResourceKind::Quiz,
        key: "2025-01-10".into(),
    };
    let props = ConfirmDialogProps {
        confirmation: Some(Confirmation {
            prompt: target.prompt(),
            target,
        }),
        on_resolve: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ConfirmDialog>::with_props(props).render());
    assert!(html.contains("Delete Quiz 2025-01-10? This cannot be undone."));
    assert!(html.contains("confirm-dialog"));

    let props = ConfirmDialogProps {
        confirmation: None,
        on_resolve: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ConfirmDialog>::with_props(props).render());
    assert!(!html.contains("confirm-dialog"));
}

#[test]
fn error_panel_offers_retry_and_back() {
    let props = ErrorPanelViewProps {
        panel: ErrorPanel {
            message: "Internal Server Error".into(),
            retry: Page::QuizDetail("2025-01-10".into()),
            back: Some(Page::QuizList),
        },
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ErrorPanelView>::with_props(props).render());
    assert!(html.contains("Internal Server Error"));
    assert!(html.contains("🔄 Retry"));
    assert!(html.contains("⬅️ Back to list"));
}

#[test]
fn nav_bar_marks_the_current_section() {
    let props = NavBarProps {
        current: Page::RaffleDetail("2025-02-01".into()),
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NavBar>::with_props(props).render());
    assert!(html.contains("🎟️ Raffles"));
    assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
}

#[test]
fn pagination_disables_prev_on_first_page() {
    let props = PaginationProps {
        pager: Pager {
            page: 0,
            page_size: 50,
            total: 120,
        },
        class: yew::Classes::new(),
        on_change: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Pagination>::with_props(props).render());
    assert!(html.contains("«"));
    assert!(html.contains(">3<"));
    assert!(!html.contains(">4<"));
}

#[test]
fn quiz_detail_renders_toolbar_and_questions() {
    let meta = QuizMeta {
        quiz_date: "2025-01-10".into(),
        title: Some("Morning quiz".into()),
        starts_at: None,
        starts_at_msk: Some("2025-01-10T12:00".into()),
        enabled: true,
    };
    let stats = QuizStats {
        quiz_date: "2025-01-10".into(),
        total_participants: 12,
        with_tickets: 9,
        no_tickets: 3,
        non_participants: 40,
    };
    let questions = QuizQuestions {
        questions: vec![QuizQuestion {
            id: 1,
            question: "Which sign rules March?".into(),
            options: BTreeMap::from([
                ("1".to_string(), "Aries".to_string()),
                ("2".to_string(), "Pisces".to_string()),
            ]),
            correct_answer: "2".into(),
        }],
    };
    let props = DetailPanelProps {
        view: quiz_detail(meta, &stats, questions),
        pending: Vec::new(),
        handlers: AppHandlers::default(),
    };
    let html = block_on(LocalServerRenderer::<DetailPanel>::with_props(props).render());
    assert!(html.contains("Quiz 2025-01-10 — Morning quiz"));
    assert!(html.contains("⏸️ Disable"));
    assert!(html.contains("📄 Duplicate"));
    assert!(html.contains("👁️ Preview"));
    assert!(html.contains("Questions (1)"));
    assert!(html.contains("2) Pisces ✓"));
    assert!(html.contains("⬅️ Back to list"));
    assert!(html.contains("Starts 2025-01-10 12:00"));
}
