//! End-to-end session tests against the in-memory store.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use pageforge_editor::{Notifier, PageSession, SectionEdit, SessionError};
use pageforge_sections::{MediaPlacement, PagePropertiesPatch, Section, SectionKind};
use pageforge_store::{
    ComponentGateway, ComponentRow, ComponentStore, ComponentType, MemoryStore, StaticAuth,
    StoreError,
};

/// Captures notifier traffic so tests can assert on the exact messages.
#[derive(Default)]
struct RecordingNotifier {
    messages: Mutex<Vec<(bool, String)>>,
}

impl RecordingNotifier {
    fn successes(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(ok, _)| *ok)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn errors(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(ok, _)| !*ok)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.messages.lock().unwrap().push((true, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.messages.lock().unwrap().push((false, message.to_string()));
    }
}

/// Store wrapper that rejects upserts for one component type.
struct FailingStore {
    inner: Arc<MemoryStore>,
    fail_on: ComponentType,
}

#[async_trait]
impl ComponentStore for FailingStore {
    async fn fetch_components(&self, page_slug: &str) -> Result<Vec<ComponentRow>, StoreError> {
        self.inner.fetch_components(page_slug).await
    }

    async fn upsert_component(&self, row: ComponentRow) -> Result<(), StoreError> {
        if row.component_type == self.fail_on {
            return Err(StoreError::Rejected {
                status: 500,
                message: "injected failure".to_string(),
            });
        }
        self.inner.upsert_component(row).await
    }
}

fn session_on(
    store: Arc<dyn ComponentStore>,
    auth: StaticAuth,
) -> (PageSession, Arc<RecordingNotifier>) {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let notifier = Arc::new(RecordingNotifier::default());
    let gateway = ComponentGateway::new(store, Arc::new(auth));
    let session = PageSession::new("home", gateway, notifier.clone());
    (session, notifier)
}

#[tokio::test]
async fn load_on_empty_store_hydrates_defaults() {
    let store = Arc::new(MemoryStore::new());
    let (mut session, _) = session_on(store, StaticAuth::admin("u1"));

    session.load().await;

    let tags: Vec<_> = session
        .sections()
        .sections()
        .iter()
        .map(|s| SectionKind::of(s).as_str())
        .collect();
    assert_eq!(tags, ["hero", "cta", "feature-card-grid"]);
    assert!(!session.is_dirty());
}

#[tokio::test]
async fn save_all_then_load_round_trips_edits() {
    let store = Arc::new(MemoryStore::new());
    let (mut session, notifier) = session_on(store.clone(), StaticAuth::admin("u1"));
    session.load().await;

    session.insert_section(SectionKind::Text, Some(0));
    session
        .patch_section(
            1,
            &SectionEdit::SetContent { content: "Hello there".to_string() },
        )
        .unwrap();
    session.set_page_properties(PagePropertiesPatch {
        background_color: Some("#112233".to_string()),
        ..Default::default()
    });
    assert!(session.is_dirty());

    session.save_all().await.unwrap();
    assert!(!session.is_dirty());
    assert_eq!(
        notifier.successes(),
        [
            "Sections saved successfully!",
            "Hero section saved successfully!",
            "Page properties saved successfully!"
        ]
    );

    let (mut restored, _) = session_on(store, StaticAuth::admin("u1"));
    restored.load().await;

    assert_eq!(restored.sections().len(), 4);
    match restored.sections().get(1).unwrap() {
        Section::Text(text) => assert_eq!(text.content, "Hello there"),
        other => panic!("expected text section, got {other:?}"),
    }
    assert_eq!(restored.page_properties().background_color, "#112233");
}

#[tokio::test]
async fn save_all_without_identity_writes_nothing_and_stays_dirty() {
    let store = Arc::new(MemoryStore::new());
    let (mut session, notifier) = session_on(store.clone(), StaticAuth::anonymous());
    session.load().await;

    session.insert_section(SectionKind::Heading, None);
    let result = session.save_all().await;

    assert!(matches!(
        result,
        Err(SessionError::Store(StoreError::NoAuthenticatedUser))
    ));
    assert_eq!(store.row_count().await, 0);
    assert!(session.is_dirty());
    assert_eq!(notifier.errors(), ["Failed to save sections"]);
}

#[tokio::test]
async fn partial_save_failure_aborts_remaining_components() {
    let inner = Arc::new(MemoryStore::new());
    let store = Arc::new(FailingStore {
        inner: inner.clone(),
        fail_on: ComponentType::Hero,
    });
    let (mut session, notifier) = session_on(store, StaticAuth::admin("u1"));
    session.load().await;

    session.insert_section(SectionKind::Quote, None);
    session.set_page_properties(PagePropertiesPatch {
        font_family: Some("serif".to_string()),
        ..Default::default()
    });

    let result = session.save_all().await;
    assert!(result.is_err());

    // Sections landed before the injected hero failure; page properties
    // were never attempted.
    assert!(inner.get_row("home", ComponentType::Sections).await.is_some());
    assert!(inner.get_row("home", ComponentType::Hero).await.is_none());
    assert!(inner
        .get_row("home", ComponentType::PageProperties)
        .await
        .is_none());

    assert_eq!(notifier.successes(), ["Sections saved successfully!"]);
    assert_eq!(notifier.errors(), ["Failed to save hero section"]);

    // Unsaved components stay marked for retry.
    assert!(!session.sections().is_dirty());
    assert!(session.is_dirty());
    assert!(!session.is_saving());
}

#[tokio::test]
async fn slider_saves_anonymously_with_composite_payload() {
    let store = Arc::new(MemoryStore::new());
    let (mut session, notifier) = session_on(store.clone(), StaticAuth::anonymous());
    session.load().await;

    session.slider_mut().set_title("Summer Gallery".to_string());
    assert!(session.slider().is_dirty());

    session.save_slider().await.unwrap();
    assert!(!session.slider().is_dirty());
    assert_eq!(notifier.successes(), ["Slider saved successfully"]);

    let row = store.get_row("home", ComponentType::Slider).await.unwrap();
    assert_eq!(row.updated_by, None);
    assert_eq!(row.content["sliderTitle"], "Summer Gallery");
    assert_eq!(row.content["slider"]["type"], "slider");
}

#[tokio::test]
async fn hero_slider_saves_its_own_composite_payload() {
    let store = Arc::new(MemoryStore::new());
    let (mut session, notifier) = session_on(store.clone(), StaticAuth::anonymous());
    session.load().await;

    session.hero_slider_mut().set_title_visible(false);
    session.save_hero_slider().await.unwrap();

    assert!(!session.hero_slider().is_dirty());
    assert_eq!(notifier.successes(), ["Hero slider saved successfully"]);

    let row = store.get_row("home", ComponentType::HeroSlider).await.unwrap();
    assert_eq!(row.content["heroSliderTitleVisible"], false);
    assert_eq!(row.content["heroSlider"]["type"], "advanced-slider");
}

#[tokio::test]
async fn section_order_failure_is_notify_only() {
    let inner = Arc::new(MemoryStore::new());
    let store = Arc::new(FailingStore {
        inner,
        fail_on: ComponentType::SectionOrder,
    });
    let (mut session, notifier) = session_on(store, StaticAuth::admin("u1"));
    session.load().await;

    session.save_section_order().await;
    assert_eq!(notifier.errors(), ["Failed to save section order"]);
}

#[tokio::test]
async fn load_backfills_media_position_from_tag() {
    let store = Arc::new(MemoryStore::new());
    let gateway = ComponentGateway::new(store.clone(), Arc::new(StaticAuth::admin("u1")));
    // Legacy payload without a mediaPosition field.
    gateway
        .save_component(
            "home",
            ComponentType::Sections,
            serde_json::json!([{
                "type": "media-text-right",
                "id": "mt-1",
                "title": "Side by side",
                "description": "",
            }]),
        )
        .await
        .unwrap();

    let (mut session, _) = session_on(store, StaticAuth::admin("u1"));
    session.load().await;

    match session.sections().get(0).unwrap() {
        Section::MediaTextRight(mt) => {
            assert_eq!(mt.media_position, Some(MediaPlacement::Right));
        }
        other => panic!("expected media-text-right, got {other:?}"),
    }
    assert!(!session.is_dirty());
}

#[tokio::test]
async fn resolved_media_lands_on_the_tracked_card() {
    let store = Arc::new(MemoryStore::new());
    let (mut session, _) = session_on(store, StaticAuth::admin("u1"));
    session.load().await;

    // The default feature-card-grid sits at index 2.
    let card_id = {
        let section = session.sections().get(2).unwrap();
        section.cards().unwrap()[1].id.clone()
    };
    session.open_media_picker(2, Some(card_id.clone()));
    session
        .resolve_media("/img/team.jpg", pageforge_sections::MediaKind::Image)
        .unwrap();

    let cards = session.sections().get(2).unwrap().cards().unwrap();
    assert_eq!(cards[1].media_url, "/img/team.jpg");
    assert_eq!(cards[0].media_url, "");
    assert!(session.is_dirty());
    assert!(session.media_picker_target().is_none());
}
