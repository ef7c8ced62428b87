//! Editing session for one open order.
//!
//! A session holds a working copy of the order plus the view state the
//! presentation layer needs: which of the two editing views is active, the
//! task-type filter, and the category badges. Badges are recomputed after
//! every order command.

use serde::{Deserialize, Serialize};

use crate::aggregate::{OrderCommand, apply};
use crate::calculations::{CategoryBadges, OrderTotals, category_badge_counts};
use crate::catalog::{Catalog, TaskFilter};
use crate::models::{CatalogTask, Order, OrderId};

/// The two mutually exclusive editing views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum View {
    /// Task selection, quantities and remarks over the filtered catalog
    #[default]
    Entry,
    /// Tabular view plus spare-part editing
    PartsHub,
}

impl View {
    pub fn toggled(self) -> Self {
        match self {
            Self::Entry => Self::PartsHub,
            Self::PartsHub => Self::Entry,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Entry => "Workmanship Panel",
            Self::PartsHub => "Parts Hub",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Order(OrderCommand),
    ShowView(View),
    ToggleView,
    SetFilter(TaskFilter),
}

impl From<OrderCommand> for SessionCommand {
    fn from(command: OrderCommand) -> Self {
        Self::Order(command)
    }
}

/// Read-only snapshot handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub order_id: OrderId,
    pub view: View,
    pub filter: TaskFilter,
    pub totals: OrderTotals,
    pub badges: CategoryBadges,
}

#[derive(Debug, Clone)]
pub struct ServiceSession<'a> {
    catalog: &'a Catalog,
    order: Order,
    view: View,
    filter: TaskFilter,
    badges: CategoryBadges,
}

impl<'a> ServiceSession<'a> {
    /// Opens `order` for editing in the entry view with no filter.
    pub fn open(
        catalog: &'a Catalog,
        order: Order,
    ) -> Self {
        let badges = category_badge_counts(catalog, &order);
        tracing::debug!(order = order.id, "session opened");
        Self {
            catalog,
            order,
            view: View::default(),
            filter: TaskFilter::default(),
            badges,
        }
    }

    pub fn dispatch(
        &mut self,
        command: impl Into<SessionCommand>,
    ) {
        match command.into() {
            SessionCommand::Order(command) => {
                self.order = apply(self.order.clone(), self.catalog, command);
                self.badges = category_badge_counts(self.catalog, &self.order);
            }
            SessionCommand::ShowView(view) => self.view = view,
            SessionCommand::ToggleView => self.view = self.view.toggled(),
            SessionCommand::SetFilter(filter) => self.filter = filter,
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    pub fn badges(&self) -> &CategoryBadges {
        &self.badges
    }

    pub fn totals(&self) -> OrderTotals {
        OrderTotals::of(&self.order)
    }

    /// Catalog tasks shown in the entry view under the current filter.
    pub fn visible_tasks(&self) -> Vec<&'a CatalogTask> {
        self.catalog.filtered(self.filter).collect()
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            order_id: self.order.id,
            view: self.view,
            filter: self.filter,
            totals: self.totals(),
            badges: self.badges.clone(),
        }
    }

    /// Ends the session, handing back the edited order for saving.
    pub fn save(self) -> Order {
        tracing::debug!(order = self.order.id, "session saved");
        self.order
    }

    /// Ends the session and drops the edits.
    pub fn discard(self) {
        tracing::debug!(order = self.order.id, "session discarded");
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{SparePartInput, TaskType};

    fn new_order() -> Order {
        Order::new(Utc.with_ymd_and_hms(2025, 4, 9, 14, 0, 0).unwrap())
    }

    #[test]
    fn opens_in_entry_view_with_all_tasks_visible() {
        let catalog = Catalog::builtin();
        let session = ServiceSession::open(&catalog, new_order());

        assert_eq!(session.view(), View::Entry);
        assert_eq!(session.filter(), TaskFilter::All);
        assert_eq!(session.visible_tasks().len(), catalog.len());
    }

    #[test]
    fn open_computes_badges_for_existing_selection() {
        let catalog = Catalog::builtin();
        let mut order = new_order();
        order.add_task(catalog.task("Refill Gear Oil").unwrap());
        order.add_task(catalog.task("Refill Engine Oil").unwrap());

        let session = ServiceSession::open(&catalog, order);

        assert_eq!(session.badges().count("refill"), 2);
    }

    #[test]
    fn badges_track_every_order_command() {
        let catalog = Catalog::builtin();
        let mut session = ServiceSession::open(&catalog, new_order());

        session.dispatch(OrderCommand::add_task("Check Oil Level"));
        session.dispatch(OrderCommand::add_task("Check Oil Level"));
        assert_eq!(session.order().selected_tasks.len(), 1);
        assert_eq!(session.badges().count("engine"), 1);

        session.dispatch(OrderCommand::remove_task("Check Oil Level"));
        assert_eq!(session.badges().count("engine"), 0);

        session.dispatch(OrderCommand::remove_task("Check Oil Level"));
        assert_eq!(session.badges().count("engine"), 0);
        assert_eq!(session.badges(), &category_badge_counts(&catalog, session.order()));
    }

    #[test]
    fn view_toggle_keeps_the_order() {
        let catalog = Catalog::builtin();
        let mut session = ServiceSession::open(&catalog, new_order());
        session.dispatch(OrderCommand::add_task("Replace Filter"));
        let before = session.order().clone();

        session.dispatch(SessionCommand::ToggleView);
        assert_eq!(session.view(), View::PartsHub);
        assert_eq!(session.order(), &before);

        session.dispatch(SessionCommand::ShowView(View::Entry));
        assert_eq!(session.view(), View::Entry);
    }

    #[test]
    fn parts_hub_edits_share_the_order() {
        let catalog = Catalog::builtin();
        let mut session = ServiceSession::open(&catalog, new_order());
        session.dispatch(OrderCommand::add_task("Check Oil Level"));
        session.dispatch(SessionCommand::ShowView(View::PartsHub));
        session.dispatch(OrderCommand::AddSparePart(
            SparePartInput::new("Filter", "2").with_unit_price(dec!(10)),
        ));
        session.dispatch(SessionCommand::ShowView(View::Entry));

        assert_eq!(session.totals().grand, dec!(55));
    }

    #[test]
    fn filter_limits_visible_tasks() {
        let catalog = Catalog::builtin();
        let mut session = ServiceSession::open(&catalog, new_order());

        session.dispatch(SessionCommand::SetFilter(TaskFilter::Type(TaskType::Inspection)));

        let names: Vec<_> = session.visible_tasks().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Inspect Belts"]);
    }

    #[test]
    fn save_returns_edited_order_with_original_identity() {
        let catalog = Catalog::builtin();
        let original = new_order();
        let mut session = ServiceSession::open(&catalog, original.clone());
        session.dispatch(OrderCommand::SetVehicleNumber {
            text: "B 123 XY".to_string(),
        });

        let saved = session.save();

        assert_eq!(saved.id, original.id);
        assert_eq!(saved.created_date, original.created_date);
        assert_eq!(saved.vehicle_number, "B 123 XY");
    }

    #[test]
    fn summary_reflects_current_state() {
        let catalog = Catalog::builtin();
        let mut session = ServiceSession::open(&catalog, new_order());
        session.dispatch(OrderCommand::add_task("Inspect Belts"));
        session.dispatch(SessionCommand::ToggleView);

        let summary = session.summary();

        assert_eq!(summary.view, View::PartsHub);
        assert_eq!(summary.totals.tasks, dec!(22.50));
        assert_eq!(summary.badges.count("engine"), 1);
    }
}
