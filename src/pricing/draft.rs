// src/pricing/draft.rs
//
// Transient editing session behind the price-update dialog. Exactly one of
// the two inputs (selling price, target margin) is authoritative at any
// time; the other is derived from it and the purchase price.

use super::{compute_margin, compute_profit, round2, selling_price_from_margin, MarginBand};

/// Read-only view of the product the dialog was opened for.
#[derive(Debug, Clone, Copy)]
pub struct ProductSnapshot {
    pub id: i64,
    pub purchase_price: f64,
    pub selling_price: f64,
}

/// Which input the user edited last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Authority {
    DrivenByPrice,
    DrivenByMargin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftState {
    Editing,
    Submitting,
    Closed,
}

/// Derived figures recomputed on every read. Unparsable input is shown as
/// zero here; submission parses strictly and never uses these values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePreview {
    pub new_selling_price: f64,
    pub current_margin: f64,
    pub new_margin: f64,
    pub profit_per_unit: f64,
    pub band: MarginBand,
}

/// Caller-supplied commit operation. The draft performs exactly one call
/// per successful submission and never retries.
pub trait UpdateSellingPrice {
    type Error;

    fn update_selling_price(
        &self,
        product_id: i64,
        new_price: f64,
    ) -> impl std::future::Future<Output = Result<(), Self::Error>> + Send;
}

#[derive(Debug, PartialEq)]
pub enum SubmitError<E> {
    /// Selling price text is not a positive number. No call was made.
    InvalidPrice,
    /// Target margin is 100% or more. No call was made.
    InvalidMargin,
    /// A submission is already in flight, or the draft is closed.
    NotEditing,
    /// The external update rejected; the draft stays open for retry.
    Rejected(E),
}

#[derive(Debug)]
pub struct PriceDraft {
    product: ProductSnapshot,
    selling_price_input: String,
    target_margin_input: String,
    authority: Authority,
    state: DraftState,
}

impl PriceDraft {
    /// Opens a draft seeded with the product's current selling price.
    pub fn open(product: ProductSnapshot) -> Self {
        Self {
            selling_price_input: format!("{:.2}", product.selling_price),
            target_margin_input: String::new(),
            authority: Authority::DrivenByPrice,
            state: DraftState::Editing,
            product,
        }
    }

    pub fn state(&self) -> DraftState {
        self.state
    }

    /// User typed into the selling price field; price becomes authoritative.
    pub fn set_selling_price(&mut self, text: impl Into<String>) {
        self.selling_price_input = text.into();
        self.authority = Authority::DrivenByPrice;
    }

    /// User typed into the target margin field; margin becomes authoritative.
    pub fn set_target_margin(&mut self, text: impl Into<String>) {
        self.target_margin_input = text.into();
        self.authority = Authority::DrivenByMargin;
    }

    /// One-click margin preset, equivalent to typing it in the margin field.
    pub fn apply_preset(&mut self, margin_percent: f64) {
        self.set_target_margin(format!("{}", margin_percent));
    }

    /// Effective new selling price under the current authority, parsed
    /// strictly. Fails when the authoritative text does not resolve to a
    /// usable positive price.
    fn effective_price(&self) -> Result<f64, SubmitError<std::convert::Infallible>> {
        match self.authority {
            Authority::DrivenByPrice => match self.selling_price_input.trim().parse::<f64>() {
                Ok(p) if p.is_finite() && p > 0.0 => Ok(p),
                _ => Err(SubmitError::InvalidPrice),
            },
            Authority::DrivenByMargin => {
                let margin = self
                    .target_margin_input
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| SubmitError::InvalidPrice)?;
                let price = selling_price_from_margin(self.product.purchase_price, margin)
                    .map_err(|_| SubmitError::InvalidMargin)?;
                if price > 0.0 {
                    Ok(round2(price))
                } else {
                    Err(SubmitError::InvalidPrice)
                }
            }
        }
    }

    /// Lenient figures for the dialog body. Text that does not parse is
    /// previewed as zero, never submitted as zero.
    pub fn preview(&self) -> PricePreview {
        let new_price = self.effective_price().unwrap_or(0.0);
        let new_margin = compute_margin(self.product.purchase_price, new_price);
        PricePreview {
            new_selling_price: round2(new_price),
            current_margin: round2(compute_margin(
                self.product.purchase_price,
                self.product.selling_price,
            )),
            new_margin: round2(new_margin),
            profit_per_unit: round2(compute_profit(self.product.purchase_price, new_price)),
            band: MarginBand::classify(new_margin),
        }
    }

    /// Validates, then commits through `updater`. On success the draft is
    /// closed; on rejection it returns to `Editing` with the error surfaced
    /// so the caller can retry. Validation failures make no external call.
    pub async fn submit<U: UpdateSellingPrice>(
        &mut self,
        updater: &U,
    ) -> Result<f64, SubmitError<U::Error>> {
        if self.state != DraftState::Editing {
            return Err(SubmitError::NotEditing);
        }
        let price = round2(self.effective_price().map_err(|e| match e {
            SubmitError::InvalidMargin => SubmitError::InvalidMargin,
            _ => SubmitError::InvalidPrice,
        })?);

        self.state = DraftState::Submitting;
        match updater.update_selling_price(self.product.id, price).await {
            Ok(()) => {
                self.state = DraftState::Closed;
                Ok(price)
            }
            Err(e) => {
                self.state = DraftState::Editing;
                Err(SubmitError::Rejected(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct RecordingUpdater {
        calls: AtomicUsize,
        fail: bool,
    }

    impl RecordingUpdater {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl UpdateSellingPrice for RecordingUpdater {
        type Error = String;

        async fn update_selling_price(&self, _id: i64, _price: f64) -> Result<(), String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err("update rejected".to_string())
            } else {
                Ok(())
            }
        }
    }

    fn snapshot() -> ProductSnapshot {
        ProductSnapshot {
            id: 7,
            purchase_price: 80.0,
            selling_price: 100.0,
        }
    }

    #[test]
    fn opens_seeded_from_current_price() {
        let draft = PriceDraft::open(snapshot());
        assert_eq!(draft.state(), DraftState::Editing);
        let preview = draft.preview();
        assert_eq!(preview.new_selling_price, 100.0);
        assert_eq!(preview.current_margin, 20.0);
        assert_eq!(preview.new_margin, 20.0);
        assert_eq!(preview.profit_per_unit, 20.0);
        assert_eq!(preview.band, MarginBand::Healthy);
    }

    #[test]
    fn margin_edit_takes_authority_over_price() {
        let mut draft = PriceDraft::open(snapshot());
        draft.set_selling_price("95");
        draft.set_target_margin("25");
        let preview = draft.preview();
        assert_eq!(preview.new_selling_price, 106.67);
        assert_eq!(preview.new_margin, 25.0);
    }

    #[test]
    fn price_edit_takes_authority_back_from_margin() {
        let mut draft = PriceDraft::open(snapshot());
        draft.set_target_margin("25");
        draft.set_selling_price("90");
        let preview = draft.preview();
        assert_eq!(preview.new_selling_price, 90.0);
        assert_eq!(preview.profit_per_unit, 10.0);
    }

    #[test]
    fn preset_drives_price_like_typed_margin() {
        let mut draft = PriceDraft::open(snapshot());
        draft.apply_preset(50.0);
        assert_eq!(draft.preview().new_selling_price, 160.0);
    }

    #[test]
    fn unparsable_text_previews_as_zero() {
        let mut draft = PriceDraft::open(snapshot());
        draft.set_selling_price("abc");
        let preview = draft.preview();
        assert_eq!(preview.new_selling_price, 0.0);
        assert_eq!(preview.new_margin, 0.0);
        assert_eq!(preview.profit_per_unit, -80.0);
    }

    #[tokio::test]
    async fn empty_price_blocks_submit_without_external_call() {
        let updater = RecordingUpdater::new(false);
        let mut draft = PriceDraft::open(snapshot());
        draft.set_selling_price("");
        let err = draft.submit(&updater).await.unwrap_err();
        assert_eq!(err, SubmitError::InvalidPrice);
        assert_eq!(updater.calls(), 0);
        assert_eq!(draft.state(), DraftState::Editing);
    }

    #[tokio::test]
    async fn non_positive_price_blocks_submit() {
        let updater = RecordingUpdater::new(false);
        let mut draft = PriceDraft::open(snapshot());
        draft.set_selling_price("-5");
        assert_eq!(
            draft.submit(&updater).await.unwrap_err(),
            SubmitError::InvalidPrice
        );
        draft.set_selling_price("0");
        assert_eq!(
            draft.submit(&updater).await.unwrap_err(),
            SubmitError::InvalidPrice
        );
        assert_eq!(updater.calls(), 0);
    }

    #[tokio::test]
    async fn margin_at_100_blocks_submit() {
        let updater = RecordingUpdater::new(false);
        let mut draft = PriceDraft::open(snapshot());
        draft.set_target_margin("100");
        assert_eq!(
            draft.submit(&updater).await.unwrap_err(),
            SubmitError::InvalidMargin
        );
        assert_eq!(updater.calls(), 0);
    }

    #[tokio::test]
    async fn successful_submit_calls_once_and_closes() {
        let updater = RecordingUpdater::new(false);
        let mut draft = PriceDraft::open(snapshot());
        draft.set_target_margin("25");
        let committed = draft.submit(&updater).await.unwrap();
        assert_eq!(committed, 106.67);
        assert_eq!(updater.calls(), 1);
        assert_eq!(draft.state(), DraftState::Closed);
    }

    #[tokio::test]
    async fn rejected_update_keeps_draft_open_for_retry() {
        let failing = RecordingUpdater::new(true);
        let mut draft = PriceDraft::open(snapshot());
        draft.set_selling_price("110");
        match draft.submit(&failing).await {
            Err(SubmitError::Rejected(msg)) => assert_eq!(msg, "update rejected"),
            other => panic!("expected rejection, got {:?}", other),
        }
        assert_eq!(draft.state(), DraftState::Editing);

        // retry against a working updater succeeds with the same draft
        let ok = RecordingUpdater::new(false);
        assert_eq!(draft.submit(&ok).await.unwrap(), 110.0);
        assert_eq!(draft.state(), DraftState::Closed);
    }

    #[tokio::test]
    async fn closed_draft_refuses_resubmission() {
        let updater = RecordingUpdater::new(false);
        let mut draft = PriceDraft::open(snapshot());
        draft.set_selling_price("110");
        draft.submit(&updater).await.unwrap();
        assert_eq!(
            draft.submit(&updater).await.unwrap_err(),
            SubmitError::NotEditing
        );
        assert_eq!(updater.calls(), 1);
    }
}
