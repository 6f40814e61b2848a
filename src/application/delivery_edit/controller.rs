//! Sales delivery edit controller.
//!
//! Owns the current document instance, translates shell events into
//! domain operations and repository calls, and keeps the view in sync
//! with the authoritative in-memory state. All outcomes - success,
//! server failure, local fault - are routed through the message port;
//! nothing here panics the screen.
//!
//! One repository call is in flight at a time, enforced by an explicit
//! busy flag rather than callback ordering. Modal dialogs suspend the
//! flow in `await`; a "No" answer simply ends the operation.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::delivery::SalesDelivery;
use crate::domain::foundation::{Condition, ConditionOperation, LineId};
use crate::i18n;
use crate::ports::{
    ChooseRequest, ChooseService, DeliveryEditView, MessageAction, MessageService, MessageType,
    SalesRepository, BO_CODE_CUSTOMER, BO_CODE_MATERIAL,
};

/// Edit controller for the sales delivery master-detail screen.
pub struct DeliveryEditController {
    repository: Arc<dyn SalesRepository>,
    chooser: Arc<dyn ChooseService>,
    view: Arc<dyn DeliveryEditView>,
    messages: Arc<dyn MessageService>,

    /// The one current document. `None` between a successful delete and
    /// the next render.
    edit_data: Option<SalesDelivery>,

    /// Set while a repository call is in flight.
    busy: bool,
}

impl DeliveryEditController {
    pub fn new(
        repository: Arc<dyn SalesRepository>,
        chooser: Arc<dyn ChooseService>,
        view: Arc<dyn DeliveryEditView>,
        messages: Arc<dyn MessageService>,
    ) -> Self {
        Self {
            repository,
            chooser,
            view,
            messages,
            edit_data: None,
            busy: false,
        }
    }

    /// Screen title from the catalog.
    pub fn title(&self) -> String {
        i18n::prop("sales_app_salesdelivery_edit")
    }

    /// Business-object code of the document type this screen edits.
    pub fn bo_code(&self) -> &'static str {
        crate::domain::delivery::BO_CODE_SALESDELIVERY
    }

    /// The current document, if any.
    pub fn delivery(&self) -> Option<&SalesDelivery> {
        self.edit_data.as_ref()
    }

    /// Whether a repository call is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Renders the current document, creating a fresh one first when
    /// none is current.
    pub fn show(&mut self) {
        if self.edit_data.is_none() {
            self.edit_data = Some(SalesDelivery::new());
            self.messages
                .proceeding(MessageType::Warning, &i18n::prop("shell_data_created_new"));
        }
        if let Some(delivery) = self.edit_data.as_ref() {
            self.view.show_delivery(delivery);
            self.view.show_delivery_lines(&delivery.visible_lines());
        }
    }

    /// Entry point when the screen is invoked with a query template.
    ///
    /// A template carrying a usable criteria triggers a re-fetch; a hit
    /// replaces the current document, a miss notifies that the record
    /// was removed and falls back to a fresh one. Without a usable
    /// criteria this is just `show`.
    pub async fn run(&mut self, template: Option<&SalesDelivery>) {
        if self.busy {
            debug!("run ignored, repository call in flight");
            return;
        }
        if let Some(criteria) = template.and_then(|t| t.criteria()).filter(|c| c.is_usable()) {
            self.busy = true;
            let rslt = self.repository.fetch_delivery(&criteria).await;
            self.busy = false;

            let data = if rslt.is_ok() { rslt.into_first() } else { None };
            match data {
                Some(delivery) => {
                    debug!(doc_entry = ?delivery.doc_entry(), "re-fetched edit data");
                    self.edit_data = Some(delivery);
                    self.show();
                }
                None => {
                    // Recoverable miss, not an error: the record is gone
                    // and the user continues on a fresh one.
                    self.messages
                        .acknowledge(
                            MessageType::Warning,
                            &i18n::prop("shell_data_deleted_and_created"),
                        )
                        .await;
                    self.show();
                }
            }
            return;
        }
        self.show();
    }

    /// Saves the current document.
    ///
    /// A result code of zero with no returned objects is a successful
    /// delete: the current document is released and the screen falls
    /// back to a fresh one. Zero with objects replaces the current
    /// document with the server's authoritative post-save state. A
    /// nonzero code surfaces the server message and leaves the pre-save
    /// state untouched.
    pub async fn save(&mut self) {
        if self.busy {
            debug!("save ignored, repository call in flight");
            return;
        }
        let Some(delivery) = self.edit_data.take() else {
            debug!("save ignored, no current document");
            return;
        };

        self.busy = true;
        self.view.set_busy(true);
        self.messages
            .proceeding(MessageType::Information, &i18n::prop("shell_saving_data"));

        let rslt = self.repository.save_delivery(&delivery).await;

        self.busy = false;
        self.view.set_busy(false);

        if !rslt.is_ok() {
            info!(code = rslt.result_code, "save rejected by server");
            // Pre-save state survives a failed save untouched.
            self.edit_data = Some(delivery);
            self.messages
                .acknowledge(MessageType::Error, &rslt.message)
                .await;
            return;
        }

        match rslt.into_first() {
            None => {
                info!("delete confirmed by server, current document released");
                self.messages
                    .acknowledge(
                        MessageType::Success,
                        &format!(
                            "{}{}",
                            i18n::prop("shell_data_delete"),
                            i18n::prop("shell_successful")
                        ),
                    )
                    .await;
            }
            Some(saved) => {
                info!(doc_entry = ?saved.doc_entry(), "save confirmed by server");
                self.edit_data = Some(saved);
                self.messages
                    .acknowledge(
                        MessageType::Success,
                        &format!(
                            "{}{}",
                            i18n::prop("shell_data_save"),
                            i18n::prop("shell_successful")
                        ),
                    )
                    .await;
            }
        }
        self.show();
    }

    /// Deletes the current document: yes/no confirmation, then a save
    /// of the delete-marked document. Delete is a save, not a separate
    /// endpoint.
    pub async fn delete(&mut self) {
        if self.edit_data.is_none() {
            return;
        }
        let action = self
            .messages
            .confirm(&self.title(), &i18n::prop("shell_whether_to_delete"))
            .await;
        if action != MessageAction::Yes {
            return;
        }
        if let Some(delivery) = self.edit_data.as_mut() {
            delivery.mark_deleted();
        }
        self.save().await;
    }

    /// Replaces the current document with a fresh or cloned one.
    ///
    /// Unsaved changes prompt for confirmation first; declining leaves
    /// the current document unchanged.
    pub async fn create(&mut self, clone: bool) {
        if let Some(current) = &self.edit_data {
            if current.is_dirty() {
                let action = self
                    .messages
                    .confirm(
                        &self.title(),
                        &i18n::prop("shell_data_not_saved_whether_to_continue"),
                    )
                    .await;
                if action != MessageAction::Yes {
                    return;
                }
            }
        }
        let next = match (&self.edit_data, clone) {
            (Some(current), true) => {
                self.messages
                    .proceeding(MessageType::Warning, &i18n::prop("shell_data_cloned_new"));
                current.clone_as_new()
            }
            _ => {
                self.messages
                    .proceeding(MessageType::Warning, &i18n::prop("shell_data_created_new"));
                SalesDelivery::new()
            }
        };
        self.edit_data = Some(next);
        self.show();
    }

    /// Opens the customer selection, excluding the currently selected
    /// customer, and copies the pick onto the header.
    pub async fn choose_customer(&mut self) {
        let Some(current_code) = self.edit_data.as_ref().map(|d| d.customer_code().to_string())
        else {
            return;
        };
        let request = ChooseRequest::new(
            BO_CODE_CUSTOMER,
            vec![Condition::new(
                BO_CODE_CUSTOMER,
                ConditionOperation::NotEqual,
                current_code,
            )],
        );
        let selections = self.chooser.choose(request).await;
        let Some(selection) = selections.first() else {
            return;
        };
        if let Some(delivery) = self.edit_data.as_mut() {
            delivery.set_customer(selection.code.clone(), selection.name.clone());
        }
        if let Some(delivery) = self.edit_data.as_ref() {
            self.view.show_delivery(delivery);
        }
    }

    /// Opens the material selection for one line and copies the picked
    /// code onto it. Unknown line ids are silent no-ops.
    pub async fn choose_material(&mut self, line: LineId) {
        let Some(delivery) = self.edit_data.as_ref() else {
            return;
        };
        if !delivery.lines().contains(line) {
            return;
        }
        let entry_value = delivery
            .doc_entry()
            .map(|e| e.to_string())
            .unwrap_or_else(|| "0".to_string());
        let request = ChooseRequest::new(
            BO_CODE_MATERIAL,
            vec![Condition::new(
                BO_CODE_MATERIAL,
                ConditionOperation::NotEqual,
                entry_value,
            )],
        );
        let selections = self.chooser.choose(request).await;
        let Some(selection) = selections.first() else {
            return;
        };
        if let Some(delivery) = self.edit_data.as_mut() {
            delivery.set_line_item_code(line, selection.code.clone());
        }
        if let Some(delivery) = self.edit_data.as_ref() {
            self.view.show_delivery_lines(&delivery.visible_lines());
        }
    }

    /// Appends a fresh line to the document.
    pub fn add_line(&mut self) {
        let Some(delivery) = self.edit_data.as_mut() else {
            return;
        };
        delivery.add_line();
        self.view.show_delivery_lines(&delivery.visible_lines());
    }

    /// Removes one or more lines: new lines outright, persisted ones by
    /// soft delete. Empty input and unknown ids are silent no-ops.
    pub fn remove_lines(&mut self, lines: &[LineId]) {
        if lines.is_empty() {
            return;
        }
        let Some(delivery) = self.edit_data.as_mut() else {
            return;
        };
        for id in lines {
            delivery.remove_line(*id);
        }
        self.view.show_delivery_lines(&delivery.visible_lines());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::delivery::SalesDeliveryItem;
    use crate::domain::foundation::{Criteria, DocEntry, OperationResult};
    use crate::ports::Selection;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockRepository {
        fetch_result: Mutex<Option<OperationResult<SalesDelivery>>>,
        save_result: Mutex<Option<OperationResult<SalesDelivery>>>,
        saved: Mutex<Vec<SalesDelivery>>,
        fetched: Mutex<Vec<Criteria>>,
    }

    impl MockRepository {
        fn new() -> Self {
            Self {
                fetch_result: Mutex::new(None),
                save_result: Mutex::new(None),
                saved: Mutex::new(Vec::new()),
                fetched: Mutex::new(Vec::new()),
            }
        }

        fn with_fetch(self, rslt: OperationResult<SalesDelivery>) -> Self {
            *self.fetch_result.lock().unwrap() = Some(rslt);
            self
        }

        fn with_save(self, rslt: OperationResult<SalesDelivery>) -> Self {
            *self.save_result.lock().unwrap() = Some(rslt);
            self
        }

        fn saved(&self) -> Vec<SalesDelivery> {
            self.saved.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SalesRepository for MockRepository {
        async fn fetch_delivery(&self, criteria: &Criteria) -> OperationResult<SalesDelivery> {
            self.fetched.lock().unwrap().push(criteria.clone());
            self.fetch_result
                .lock()
                .unwrap()
                .clone()
                .unwrap_or_else(|| OperationResult::success(vec![]))
        }

        async fn save_delivery(&self, delivery: &SalesDelivery) -> OperationResult<SalesDelivery> {
            self.saved.lock().unwrap().push(delivery.clone());
            self.save_result
                .lock()
                .unwrap()
                .clone()
                .unwrap_or_else(|| OperationResult::success(vec![delivery.clone()]))
        }
    }

    struct MockChooser {
        selections: Vec<Selection>,
        requests: Mutex<Vec<ChooseRequest>>,
    }

    impl MockChooser {
        fn picking(selections: Vec<Selection>) -> Self {
            Self {
                selections,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn dismissed() -> Self {
            Self::picking(vec![])
        }

        fn requests(&self) -> Vec<ChooseRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChooseService for MockChooser {
        async fn choose(&self, request: ChooseRequest) -> Vec<Selection> {
            self.requests.lock().unwrap().push(request);
            self.selections.clone()
        }
    }

    #[derive(Default)]
    struct RecordingView {
        header_renders: Mutex<usize>,
        line_renders: Mutex<Vec<usize>>,
        busy_states: Mutex<Vec<bool>>,
    }

    impl RecordingView {
        fn last_line_count(&self) -> Option<usize> {
            self.line_renders.lock().unwrap().last().copied()
        }

        fn line_render_calls(&self) -> usize {
            self.line_renders.lock().unwrap().len()
        }
    }

    impl DeliveryEditView for RecordingView {
        fn show_delivery(&self, _delivery: &SalesDelivery) {
            *self.header_renders.lock().unwrap() += 1;
        }

        fn show_delivery_lines(&self, lines: &[&SalesDeliveryItem]) {
            self.line_renders.lock().unwrap().push(lines.len());
        }

        fn set_busy(&self, busy: bool) {
            self.busy_states.lock().unwrap().push(busy);
        }
    }

    struct ScriptedMessages {
        answer: MessageAction,
        confirms: Mutex<Vec<String>>,
        notices: Mutex<Vec<(MessageType, String)>>,
        statuses: Mutex<Vec<(MessageType, String)>>,
    }

    impl ScriptedMessages {
        fn answering(answer: MessageAction) -> Self {
            Self {
                answer,
                confirms: Mutex::new(Vec::new()),
                notices: Mutex::new(Vec::new()),
                statuses: Mutex::new(Vec::new()),
            }
        }

        fn confirms(&self) -> Vec<String> {
            self.confirms.lock().unwrap().clone()
        }

        fn notices(&self) -> Vec<(MessageType, String)> {
            self.notices.lock().unwrap().clone()
        }

        fn statuses(&self) -> Vec<(MessageType, String)> {
            self.statuses.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MessageService for ScriptedMessages {
        async fn confirm(&self, _title: &str, message: &str) -> MessageAction {
            self.confirms.lock().unwrap().push(message.to_string());
            self.answer
        }

        async fn acknowledge(&self, message_type: MessageType, message: &str) {
            self.notices
                .lock()
                .unwrap()
                .push((message_type, message.to_string()));
        }

        fn proceeding(&self, message_type: MessageType, message: &str) {
            self.statuses
                .lock()
                .unwrap()
                .push((message_type, message.to_string()));
        }
    }

    struct Harness {
        repository: Arc<MockRepository>,
        chooser: Arc<MockChooser>,
        view: Arc<RecordingView>,
        messages: Arc<ScriptedMessages>,
        controller: DeliveryEditController,
    }

    fn harness(repository: MockRepository, chooser: MockChooser, answer: MessageAction) -> Harness {
        let repository = Arc::new(repository);
        let chooser = Arc::new(chooser);
        let view = Arc::new(RecordingView::default());
        let messages = Arc::new(ScriptedMessages::answering(answer));
        let controller = DeliveryEditController::new(
            repository.clone(),
            chooser.clone(),
            view.clone(),
            messages.clone(),
        );
        Harness {
            repository,
            chooser,
            view,
            messages,
            controller,
        }
    }

    fn default_harness() -> Harness {
        harness(
            MockRepository::new(),
            MockChooser::dismissed(),
            MessageAction::Yes,
        )
    }

    fn persisted_delivery(entry: i32) -> SalesDelivery {
        SalesDelivery::reconstitute(
            DocEntry::new(entry),
            "C0001",
            "Ipsum Ltd",
            vec![SalesDeliveryItem::persisted("A0001", 2.0)],
        )
    }

    // show

    #[tokio::test]
    async fn show_creates_a_fresh_document_when_none_is_current() {
        let mut h = default_harness();
        h.controller.show();

        let delivery = h.controller.delivery().unwrap();
        assert!(delivery.is_new());
        assert_eq!(h.view.last_line_count(), Some(0));
    }

    // run

    #[tokio::test]
    async fn run_with_usable_criteria_replaces_the_document_on_hit() {
        let fetched = persisted_delivery(7);
        let mut h = harness(
            MockRepository::new().with_fetch(OperationResult::success(vec![fetched])),
            MockChooser::dismissed(),
            MessageAction::Yes,
        );

        let template = persisted_delivery(7);
        h.controller.run(Some(&template)).await;

        let current = h.controller.delivery().unwrap();
        assert_eq!(current.doc_entry(), Some(DocEntry::new(7)));
        assert_eq!(h.view.last_line_count(), Some(1));
    }

    #[tokio::test]
    async fn run_miss_notifies_and_falls_back_to_a_fresh_document() {
        let mut h = harness(
            MockRepository::new().with_fetch(OperationResult::success(vec![])),
            MockChooser::dismissed(),
            MessageAction::Yes,
        );

        let template = persisted_delivery(9);
        h.controller.run(Some(&template)).await;

        assert!(h.controller.delivery().unwrap().is_new());
        let notices = h.messages.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].0, MessageType::Warning);
        assert_eq!(h.view.last_line_count(), Some(0));
    }

    #[tokio::test]
    async fn run_without_template_just_shows() {
        let mut h = default_harness();
        h.controller.run(None).await;

        assert!(h.controller.delivery().unwrap().is_new());
        assert!(h.repository.fetched.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn run_with_new_template_has_no_criteria_and_just_shows() {
        let mut h = default_harness();
        let template = SalesDelivery::new();
        h.controller.run(Some(&template)).await;

        assert!(h.repository.fetched.lock().unwrap().is_empty());
        assert!(h.controller.delivery().is_some());
    }

    // save

    #[tokio::test]
    async fn save_replaces_the_document_with_the_server_copy() {
        let server_copy = persisted_delivery(42);
        let mut h = harness(
            MockRepository::new().with_save(OperationResult::success(vec![server_copy])),
            MockChooser::dismissed(),
            MessageAction::Yes,
        );

        h.controller.show();
        h.controller.save().await;

        let current = h.controller.delivery().unwrap();
        assert_eq!(current.doc_entry(), Some(DocEntry::new(42)));
        let notices = h.messages.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].0, MessageType::Success);
        // Busy indicator toggled around the call, saving status shown.
        assert_eq!(*h.view.busy_states.lock().unwrap(), vec![true, false]);
        let statuses = h.messages.statuses();
        assert_eq!(statuses[0].0, MessageType::Information);
        assert!(statuses[0].1.contains("Saving"));
    }

    #[tokio::test]
    async fn save_with_no_returned_objects_is_a_successful_delete() {
        let mut h = harness(
            MockRepository::new().with_save(OperationResult::success(vec![])),
            MockChooser::dismissed(),
            MessageAction::Yes,
        );

        h.controller.show();
        h.controller.save().await;

        // Released, then show() fell back to a fresh document.
        let current = h.controller.delivery().unwrap();
        assert!(current.is_new());
        let notices = h.messages.notices();
        assert_eq!(notices[0].0, MessageType::Success);
        assert!(notices[0].1.contains("Delete"));
    }

    #[tokio::test]
    async fn failed_save_keeps_the_document_and_surfaces_the_message() {
        let mut h = harness(
            MockRepository::new().with_save(OperationResult::failure(4001, "document locked")),
            MockChooser::dismissed(),
            MessageAction::Yes,
        );

        h.controller.show();
        h.controller.add_line();
        let before = h.controller.delivery().unwrap().clone();

        h.controller.save().await;

        assert_eq!(h.controller.delivery().unwrap(), &before);
        let notices = h.messages.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].0, MessageType::Error);
        assert_eq!(notices[0].1, "document locked");
    }

    #[tokio::test]
    async fn save_is_refused_while_a_call_is_in_flight() {
        let mut h = default_harness();
        h.controller.show();
        h.controller.add_line();

        h.controller.busy = true;
        h.controller.save().await;

        assert!(h.repository.saved().is_empty());
        assert!(h.messages.notices().is_empty());
        // The in-flight flag and the document are left alone.
        assert!(h.controller.is_busy());
        assert_eq!(h.controller.delivery().unwrap().lines().len(), 1);
    }

    #[tokio::test]
    async fn run_is_refused_while_a_call_is_in_flight() {
        let fetched = persisted_delivery(7);
        let mut h = harness(
            MockRepository::new().with_fetch(OperationResult::success(vec![fetched])),
            MockChooser::dismissed(),
            MessageAction::Yes,
        );

        h.controller.busy = true;
        let template = persisted_delivery(7);
        h.controller.run(Some(&template)).await;

        assert!(h.repository.fetched.lock().unwrap().is_empty());
        assert!(h.controller.delivery().is_none());
    }

    #[tokio::test]
    async fn busy_clears_once_the_save_round_trip_completes() {
        let mut h = default_harness();
        h.controller.show();
        h.controller.save().await;
        assert!(!h.controller.is_busy());

        let mut h = harness(
            MockRepository::new().with_save(OperationResult::failure(4001, "document locked")),
            MockChooser::dismissed(),
            MessageAction::Yes,
        );
        h.controller.show();
        h.controller.save().await;
        assert!(!h.controller.is_busy());
    }

    #[tokio::test]
    async fn save_without_a_document_does_nothing() {
        let mut h = default_harness();
        h.controller.save().await;
        assert!(h.repository.saved().is_empty());
        assert!(h.messages.notices().is_empty());
    }

    // delete

    #[tokio::test]
    async fn confirmed_delete_saves_a_delete_marked_document() {
        let mut h = harness(
            MockRepository::new().with_save(OperationResult::success(vec![])),
            MockChooser::dismissed(),
            MessageAction::Yes,
        );

        h.controller.run(None).await;
        h.controller.delete().await;

        let saved = h.repository.saved();
        assert_eq!(saved.len(), 1);
        assert!(saved[0].is_deleted());
        assert_eq!(h.messages.confirms().len(), 1);
    }

    #[tokio::test]
    async fn declined_delete_leaves_the_document_alone() {
        let mut h = harness(
            MockRepository::new(),
            MockChooser::dismissed(),
            MessageAction::No,
        );

        h.controller.show();
        h.controller.delete().await;

        assert!(h.repository.saved().is_empty());
        assert!(!h.controller.delivery().unwrap().is_deleted());
    }

    // create / clone

    #[tokio::test]
    async fn create_on_a_dirty_document_asks_first_and_declining_keeps_it() {
        let mut h = harness(
            MockRepository::new(),
            MockChooser::dismissed(),
            MessageAction::No,
        );

        h.controller.show();
        h.controller.add_line();
        assert!(h.controller.delivery().unwrap().is_dirty());

        h.controller.create(false).await;

        assert_eq!(h.messages.confirms().len(), 1);
        // Still the dirty document with its one line.
        assert_eq!(h.controller.delivery().unwrap().lines().len(), 1);
    }

    #[tokio::test]
    async fn create_on_a_clean_document_does_not_ask() {
        let mut h = default_harness();
        h.controller.show();
        h.controller.create(false).await;

        assert!(h.messages.confirms().is_empty());
        assert!(h.controller.delivery().unwrap().is_new());
    }

    #[tokio::test]
    async fn clone_produces_an_unsaved_copy_of_the_current_document() {
        let server_copy = persisted_delivery(42);
        let mut h = harness(
            MockRepository::new().with_save(OperationResult::success(vec![server_copy])),
            MockChooser::dismissed(),
            MessageAction::Yes,
        );

        h.controller.show();
        h.controller.save().await;
        h.controller.create(true).await;

        let copy = h.controller.delivery().unwrap();
        assert!(copy.is_new());
        assert!(copy.doc_entry().is_none());
        assert_eq!(copy.customer_code(), "C0001");
    }

    // choose customer / material

    #[tokio::test]
    async fn choose_customer_copies_the_pick_onto_the_header() {
        let mut h = harness(
            MockRepository::new(),
            MockChooser::picking(vec![Selection::new("C0099", "Lorem GmbH")]),
            MessageAction::Yes,
        );

        h.controller.show();
        h.controller.choose_customer().await;

        let delivery = h.controller.delivery().unwrap();
        assert_eq!(delivery.customer_code(), "C0099");
        assert_eq!(delivery.customer_name(), "Lorem GmbH");

        let requests = h.chooser.requests();
        assert_eq!(requests[0].bo_code, BO_CODE_CUSTOMER);
        assert_eq!(requests[0].criteria[0].operation, ConditionOperation::NotEqual);
        // The header re-rendered with the picked customer.
        assert!(*h.view.header_renders.lock().unwrap() >= 2);
    }

    #[tokio::test]
    async fn dismissed_customer_choice_changes_nothing() {
        let mut h = default_harness();
        h.controller.show();
        h.controller.choose_customer().await;

        assert_eq!(h.controller.delivery().unwrap().customer_code(), "");
    }

    #[tokio::test]
    async fn choose_material_copies_the_pick_onto_the_line() {
        let mut h = harness(
            MockRepository::new(),
            MockChooser::picking(vec![Selection::new("A0042", "Widget")]),
            MessageAction::Yes,
        );

        h.controller.show();
        h.controller.add_line();
        let line = h.controller.delivery().unwrap().visible_lines()[0].line_id();

        h.controller.choose_material(line).await;

        let delivery = h.controller.delivery().unwrap();
        assert_eq!(delivery.visible_lines()[0].item_code(), "A0042");

        let requests = h.chooser.requests();
        assert_eq!(requests[0].bo_code, BO_CODE_MATERIAL);
        // New document: the entry-id condition falls back to zero.
        assert_eq!(requests[0].criteria[0].value, "0");
    }

    #[tokio::test]
    async fn choose_material_for_an_unknown_line_is_a_no_op() {
        let mut h = harness(
            MockRepository::new(),
            MockChooser::picking(vec![Selection::new("A0042", "Widget")]),
            MessageAction::Yes,
        );

        h.controller.show();
        h.controller.choose_material(LineId::new()).await;

        assert!(h.chooser.requests().is_empty());
    }

    // lines

    #[tokio::test]
    async fn adding_and_removing_new_lines_shrinks_both_views() {
        let mut h = default_harness();
        h.controller.show();

        h.controller.add_line();
        h.controller.add_line();
        assert_eq!(h.view.last_line_count(), Some(2));

        let first = h.controller.delivery().unwrap().visible_lines()[0].line_id();
        h.controller.remove_lines(&[first]);

        assert_eq!(h.view.last_line_count(), Some(1));
        assert_eq!(h.controller.delivery().unwrap().lines().len(), 1);
    }

    #[tokio::test]
    async fn removing_a_persisted_line_only_shrinks_the_rendered_view() {
        let fetched = persisted_delivery(7);
        let mut h = harness(
            MockRepository::new().with_fetch(OperationResult::success(vec![fetched])),
            MockChooser::dismissed(),
            MessageAction::Yes,
        );

        let template = persisted_delivery(7);
        h.controller.run(Some(&template)).await;

        let line = h.controller.delivery().unwrap().visible_lines()[0].line_id();
        h.controller.remove_lines(&[line]);

        assert_eq!(h.view.last_line_count(), Some(0));
        assert_eq!(h.controller.delivery().unwrap().lines().len(), 1);
    }

    #[tokio::test]
    async fn remove_with_empty_input_does_not_rerender() {
        let mut h = default_harness();
        h.controller.show();
        let renders_before = h.view.line_render_calls();

        h.controller.remove_lines(&[]);

        assert_eq!(h.view.line_render_calls(), renders_before);
    }

    #[tokio::test]
    async fn remove_with_unknown_id_keeps_the_collection_intact() {
        let mut h = default_harness();
        h.controller.show();
        h.controller.add_line();

        h.controller.remove_lines(&[LineId::new()]);

        assert_eq!(h.controller.delivery().unwrap().lines().len(), 1);
    }
}
