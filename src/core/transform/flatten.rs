//! Flattening transformation
//!
//! Converts one decoded product into independent output events, one per branch:
//!
//! - branch order is preserved
//! - every best price becomes a flat campaign entry, in payload order
//! - a branch without best prices still yields an event with no campaigns

use crate::domain::{BestPrice, Branch, CampaignEntry, OutputEvent, Product, ProductId};

/// Flatten a product into one event per branch
///
/// # Examples
///
/// ```
/// use pricefan::core::transform::flatten::flatten_product;
/// use pricefan::domain::{Branch, BranchId, Product, ProductId};
///
/// let product = Product::new(
///     ProductId::new(42),
///     vec![Branch::new(BranchId::new(7)), Branch::new(BranchId::new(8))],
/// );
///
/// let events = flatten_product(product);
/// assert_eq!(events.len(), 2);
/// assert!(events[0].campaigns.is_empty());
/// ```
pub fn flatten_product(product: Product) -> Vec<OutputEvent> {
    let product_id = product.id;
    product
        .branches
        .into_iter()
        .map(|branch| flatten_branch(product_id, branch))
        .collect()
}

/// Flatten one branch of a product
pub fn flatten_branch(product_id: ProductId, branch: Branch) -> OutputEvent {
    OutputEvent {
        branch_id: branch.branch_id,
        product_id,
        campaigns: branch
            .best_prices
            .into_iter()
            .map(campaign_entry)
            .collect(),
        book_price: branch.book_price,
    }
}

fn campaign_entry(best_price: BestPrice) -> CampaignEntry {
    CampaignEntry {
        price: best_price.price,
        campaign_name: best_price.campaign.name,
        campaign_start: best_price.campaign.starts_on,
        campaign_end: best_price.campaign.ends_on,
    }
}
