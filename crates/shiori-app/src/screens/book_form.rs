//! Book form screen model, shared by add and edit.
//!
//! The mode is fixed at construction: `for_add` starts blank, `for_edit`
//! prefills the fields from the existing book. Price and purchase date
//! are kept as raw text inputs and only parsed into the draft once they
//! validate.

use shiori_core::{
    domain::{Book, BookDraft},
    errors::AppError,
    relay::{LoadingRelay, Relay},
    types::BookId,
    validate::{all_valid, FieldValidation, NumberValidator, PurchaseDateValidator, TitleValidator},
    CancelToken,
};

use crate::usecases::{AddBookUsecase, EditBookUsecase};

enum FormAction {
    Add(AddBookUsecase),
    Edit(BookId, EditBookUsecase),
}

/// Headless model behind the add/edit book form.
pub struct BookFormScreen {
    name: String,
    price_input: String,
    purchase_date_input: String,
    image: Option<String>,
    action: FormAction,
    state: LoadingRelay<Book, AppError>,
    can_submit: Relay<bool>,
    cancel: CancelToken,
}

impl BookFormScreen {
    /// Create the form in add mode with blank fields.
    pub fn for_add(usecase: AddBookUsecase) -> Self {
        Self::build(String::new(), String::new(), String::new(), FormAction::Add(usecase))
    }

    /// Create the form in edit mode, prefilled from `book`.
    pub fn for_edit(book: Book, usecase: EditBookUsecase) -> Self {
        Self::build(
            book.name,
            book.price.map(|price| price.to_string()).unwrap_or_default(),
            book.purchase_date
                .map(|date| date.format(PurchaseDateValidator::FORMAT).to_string())
                .unwrap_or_default(),
            FormAction::Edit(book.id, usecase),
        )
    }

    fn build(
        name: String,
        price_input: String,
        purchase_date_input: String,
        action: FormAction,
    ) -> Self {
        let screen = Self {
            name,
            price_input,
            purchase_date_input,
            image: None,
            action,
            state: LoadingRelay::standby(),
            can_submit: Relay::new(false),
            cancel: CancelToken::new(),
        };
        screen.refresh_submit();
        screen
    }

    /// True when the form edits an existing book.
    pub fn is_edit(&self) -> bool {
        matches!(self.action, FormAction::Edit(..))
    }

    /// Update the title input.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.refresh_submit();
    }

    /// Update the raw price input.
    pub fn set_price(&mut self, input: impl Into<String>) {
        self.price_input = input.into();
        self.refresh_submit();
    }

    /// Update the raw purchase date input (`YYYY-MM-DD`).
    pub fn set_purchase_date(&mut self, input: impl Into<String>) {
        self.purchase_date_input = input.into();
        self.refresh_submit();
    }

    /// Attach or clear the base64 cover image payload. Not validated;
    /// the cover is optional.
    pub fn set_image(&mut self, image: Option<String>) {
        self.image = image;
    }

    /// Validation of the current title input.
    pub fn name_validation(&self) -> FieldValidation {
        TitleValidator::validate(&self.name)
    }

    /// Validation of the current price input.
    pub fn price_validation(&self) -> FieldValidation {
        NumberValidator::validate(&self.price_input)
    }

    /// Validation of the current purchase date input.
    pub fn purchase_date_validation(&self) -> FieldValidation {
        PurchaseDateValidator::validate(&self.purchase_date_input)
    }

    /// Lifecycle of the save operation; `Done` carries the saved book.
    pub fn state(&self) -> &LoadingRelay<Book, AppError> {
        &self.state
    }

    /// True iff title, price, and purchase date are all valid.
    pub fn can_submit(&self) -> &Relay<bool> {
        &self.can_submit
    }

    /// Stop applying results; the next completion is discarded.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Run the add or edit usecase with the current draft and publish
    /// its outcome.
    pub async fn submit(&self) {
        if self.cancel.is_cancelled() {
            return;
        }
        self.state.set_loading();

        let outcome = match &self.action {
            FormAction::Add(usecase) => usecase.add(self.draft()).await,
            FormAction::Edit(id, usecase) => usecase.edit(*id, self.draft()).await,
        };
        if self.cancel.is_cancelled() {
            return;
        }
        match outcome {
            Ok(book) => self.state.set_done(book),
            Err(error) => {
                tracing::debug!(%error, "book save failed");
                self.state.set_failed(error);
            }
        }
    }

    fn draft(&self) -> BookDraft {
        BookDraft {
            name: self.name.clone(),
            image: self.image.clone(),
            price: NumberValidator::parse(&self.price_input),
            purchase_date: PurchaseDateValidator::parse(&self.purchase_date_input),
        }
    }

    fn refresh_submit(&self) {
        self.can_submit.set(all_valid(&[
            &self.name_validation(),
            &self.price_validation(),
            &self.purchase_date_validation(),
        ]));
    }
}

impl Drop for BookFormScreen {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
