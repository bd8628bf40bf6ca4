//! HTTP API definitions.

use axum::{extract::RawQuery, Extension, Json};
use common::{pagination, Money};
use serde::Serialize;
use service::{domain, read, Controller};

use crate::Context;

/// Handler of the floor plans page state.
///
/// Restores a [`Controller`] from the request query and projects its state
/// into a [`FloorPlans`] response.
#[expect(
    clippy::unused_async,
    reason = "`async` is required to match signature"
)]
pub async fn floor_plans(
    Extension(context): Extension<Context>,
    RawQuery(query): RawQuery,
) -> Json<FloorPlans> {
    let controller = context.controller(query.as_deref().unwrap_or_default());
    Json(FloorPlans::of(&controller))
}

/// State of the floor plans page.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorPlans {
    /// Active filtering and ordering criteria.
    criteria: domain::Criteria,

    /// Active tab, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    tab: Option<String>,

    /// Canonical location query of the state.
    location: String,

    /// Indicator whether nothing matched the criteria.
    empty: bool,

    /// Pagination of the state.
    page: Pagination,

    /// [`Listing`] cards visible on the current page.
    ///
    /// [`Listing`]: domain::Listing
    listings: Vec<Card>,
}

impl FloorPlans {
    /// Projects the current state of the provided [`Controller`].
    fn of<H>(controller: &Controller<H>) -> Self {
        let read::View {
            visible,
            paging,
            empty,
        } = controller.view();
        Self {
            criteria: controller.criteria().clone(),
            tab: controller.tab().map(ToString::to_string),
            location: controller.location(),
            empty,
            page: Pagination {
                current: paging.current(),
                total: paging.total(),
                controls: paging
                    .controls()
                    .into_iter()
                    .map(Into::into)
                    .collect(),
            },
            listings: visible
                .into_iter()
                .filter_map(|id| controller.listing(id))
                .map(|listing| Card::of(listing, controller))
                .collect(),
        }
    }
}

/// Single [`Listing`] card of the floor plans page.
///
/// [`Listing`]: domain::Listing
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Unique identifier of the listing.
    id: domain::listing::Id,

    /// Human-readable name of the listing.
    name: String,

    /// Number of bedrooms, with `0` meaning a studio.
    bedrooms: domain::listing::Bedrooms,

    /// Monthly rent, in whole dollars.
    rent: Money,

    /// Monthly rent, formatted for display.
    rent_display: String,

    /// Availability label.
    availability: String,

    /// Deep link to the details page, carrying the active criteria.
    link: String,
}

impl Card {
    /// Builds a [`Card`] of the provided [`Listing`] as shown by the
    /// provided [`Controller`].
    ///
    /// [`Listing`]: domain::Listing
    fn of<H>(listing: &domain::Listing, controller: &Controller<H>) -> Self {
        Self {
            id: listing.id,
            name: listing.name.to_string(),
            bedrooms: listing.bedrooms,
            rent: listing.rent,
            rent_display: listing.rent.to_string(),
            availability: listing.availability.to_string(),
            link: controller.detail_link(listing),
        }
    }
}

/// Pagination of the floor plans page.
#[derive(Clone, Debug, Serialize)]
pub struct Pagination {
    /// 1-based number of the current page.
    current: usize,

    /// Total number of pages.
    total: usize,

    /// [`PageControl`]s of the pagination bar, in their rendering order.
    controls: Vec<PageControl>,
}

/// Single control of the pagination bar.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum PageControl {
    /// Step to the previous page.
    Previous {
        /// Indicator whether this control is clickable.
        enabled: bool,
    },

    /// Direct jump to the page with the provided number.
    Page {
        /// 1-based number of the page.
        number: usize,

        /// Indicator whether this is the current page.
        active: bool,
    },

    /// Placeholder for a run of elided pages.
    Ellipsis,

    /// Step to the next page.
    Next {
        /// Indicator whether this control is clickable.
        enabled: bool,
    },
}

impl From<pagination::Control> for PageControl {
    fn from(control: pagination::Control) -> Self {
        use pagination::Control as C;
        match control {
            C::Previous { enabled } => Self::Previous { enabled },
            C::Page { number, active } => Self::Page { number, active },
            C::Ellipsis => Self::Ellipsis,
            C::Next { enabled } => Self::Next { enabled },
        }
    }
}

#[cfg(test)]
mod spec {
    use common::Money;
    use serde_json::json;
    use service::domain::{
        listing::{Availability, Id, LinkTemplate, Name},
        Listing,
    };

    use super::FloorPlans;
    use crate::Context;

    fn listing(
        id: u64,
        bedrooms: u8,
        rent: u32,
        availability: &str,
    ) -> Listing {
        Listing {
            id: Id::from(id),
            name: Name::new(format!("Plan {id}")).unwrap(),
            bedrooms,
            rent: Money::new(rent),
            availability: Availability::new(availability).unwrap(),
            link: LinkTemplate::new("/floor-plans/{id}").unwrap(),
        }
    }

    fn context() -> Context {
        Context::new(
            vec![
                listing(1, 0, 950, "Available Now"),
                listing(2, 1, 1200, "Available Dec 2026"),
                listing(3, 2, 1500, "Available Now"),
                listing(4, 2, 1850, "Available Jan 2027"),
                listing(5, 1, 1350, "Available Now"),
                listing(6, 3, 2400, "Available Dec 2026"),
                listing(7, 2, 1700, "Available Now"),
                listing(8, 0, 1050, "Available Feb 2027"),
            ],
            service::Config::default(),
        )
    }

    #[test]
    fn projects_initial_state() {
        let controller = context().controller("");

        let plans = FloorPlans::of(&controller);

        assert_eq!(plans.location, "");
        assert_eq!(plans.tab, None);
        assert!(!plans.empty);
        assert_eq!(plans.page.current, 1);
        assert_eq!(plans.page.total, 2);
        assert_eq!(plans.listings.len(), 6);
        assert_eq!(plans.listings[0].id, Id::from(1));
        assert_eq!(plans.listings[0].rent_display, "$950");
        assert_eq!(plans.listings[0].link, "/floor-plans/1");
    }

    #[test]
    fn restores_state_from_query() {
        let controller =
            context().controller("?bedrooms=2&sort=rent-high-low&tab=all");

        let plans = FloorPlans::of(&controller);

        assert_eq!(plans.location, "bedrooms=2&sort=rent-high-low&tab=all");
        assert_eq!(plans.tab, Some("all".to_owned()));
        assert_eq!(plans.page.total, 1);
        assert_eq!(
            plans
                .listings
                .iter()
                .map(|card| card.id)
                .collect::<Vec<_>>(),
            vec![Id::from(4), Id::from(7), Id::from(3)],
        );
        assert_eq!(
            plans.listings[0].link,
            "/floor-plans/4?bedrooms=2&sort=rent-high-low",
        );
    }

    #[test]
    fn marks_unmatched_results_empty() {
        let controller = context().controller("bedrooms=9");

        let plans = FloorPlans::of(&controller);

        assert!(plans.empty);
        assert!(plans.listings.is_empty());
        assert_eq!(plans.page.total, 1);
    }

    #[test]
    fn controllers_share_the_catalog() {
        let context = context();

        let first = context.controller("");
        let second = context.controller("bedrooms=2");

        assert_eq!(first.listings().as_ptr(), second.listings().as_ptr());
    }

    #[test]
    fn serializes_to_camel_case_json() {
        let context = Context::new(
            vec![listing(1, 0, 950, "Available Now")],
            service::Config::default(),
        );
        let controller = context.controller("");

        assert_eq!(
            serde_json::to_value(FloorPlans::of(&controller)).unwrap(),
            json!({
                "criteria": {},
                "location": "",
                "empty": false,
                "page": {"current": 1, "total": 1, "controls": []},
                "listings": [{
                    "id": 1,
                    "name": "Plan 1",
                    "bedrooms": 0,
                    "rent": 950,
                    "rentDisplay": "$950",
                    "availability": "Available Now",
                    "link": "/floor-plans/1",
                }],
            }),
        );
    }

    #[test]
    fn serializes_page_controls() {
        let controller = context().controller("page=2");

        let json = serde_json::to_value(FloorPlans::of(&controller)).unwrap();

        assert_eq!(
            json["page"],
            json!({
                "current": 2,
                "total": 2,
                "controls": [
                    {"kind": "previous", "enabled": true},
                    {"kind": "page", "number": 1, "active": false},
                    {"kind": "page", "number": 2, "active": true},
                    {"kind": "next", "enabled": false},
                ],
            }),
        );
    }
}
