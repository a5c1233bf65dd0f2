//! Output event model
//!
//! One [`OutputEvent`] is produced per (product, branch) pair. Campaign entries
//! are held flat in memory and nested again on the wire:
//!
//! ```json
//! {"filial":7,"produto":42,"campanhas":[{"preco":{"valor":19.9,"formaPagamento":1,"tipoPreco":2},
//!  "campanha":{"nome":"PROMO","inicioVigencia":"2024-01-01","fimVigencia":"2024-01-31"}}],"precoLivro":null}
//! ```

use super::ids::{BranchId, ProductId};
use super::product::Price;
use serde::ser::{Serialize, Serializer};

/// A best price paired with the campaign it was achieved under
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignEntry {
    pub price: Price,
    pub campaign_name: String,
    pub campaign_start: String,
    pub campaign_end: String,
}

/// One flattened (product, branch) record
///
/// The book price is always written: `null` when absent.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct OutputEvent {
    #[serde(rename = "filial")]
    pub branch_id: BranchId,

    #[serde(rename = "produto")]
    pub product_id: ProductId,

    #[serde(rename = "campanhas")]
    pub campaigns: Vec<CampaignEntry>,

    #[serde(rename = "precoLivro")]
    pub book_price: Option<String>,
}

#[derive(serde::Serialize)]
struct CampaignWire<'a> {
    nome: &'a str,
    #[serde(rename = "inicioVigencia")]
    inicio_vigencia: &'a str,
    #[serde(rename = "fimVigencia")]
    fim_vigencia: &'a str,
}

#[derive(serde::Serialize)]
struct CampaignEntryWire<'a> {
    preco: &'a Price,
    campanha: CampaignWire<'a>,
}

impl Serialize for CampaignEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        CampaignEntryWire {
            preco: &self.price,
            campanha: CampaignWire {
                nome: &self.campaign_name,
                inicio_vigencia: &self.campaign_start,
                fim_vigencia: &self.campaign_end,
            },
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_wire_format() {
        let event = OutputEvent {
            branch_id: BranchId::new(7),
            product_id: ProductId::new(42),
            campaigns: vec![CampaignEntry {
                price: Price {
                    amount: 19.9,
                    payment_method: 1,
                    price_kind: 2,
                },
                campaign_name: "PROMO".to_string(),
                campaign_start: "2024-01-01".to_string(),
                campaign_end: "2024-01-31".to_string(),
            }],
            book_price: None,
        };

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            json!({
                "filial": 7,
                "produto": 42,
                "campanhas": [{
                    "preco": {"valor": 19.9, "formaPagamento": 1, "tipoPreco": 2},
                    "campanha": {
                        "nome": "PROMO",
                        "inicioVigencia": "2024-01-01",
                        "fimVigencia": "2024-01-31"
                    }
                }],
                "precoLivro": null
            })
        );
    }

    #[test]
    fn test_event_field_order() {
        let event = OutputEvent {
            branch_id: BranchId::new(1),
            product_id: ProductId::new(2),
            campaigns: Vec::new(),
            book_price: Some("10.50".to_string()),
        };

        let line = serde_json::to_string(&event).unwrap();
        assert_eq!(
            line,
            r#"{"filial":1,"produto":2,"campanhas":[],"precoLivro":"10.50"}"#
        );
    }
}
