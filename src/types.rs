//! Core types for endpoint-to-schema resolution.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Returns the JSON type name for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Shape of a decoded response body.
///
/// `Single` endpoints answer with one JSON object, `Collection` endpoints
/// with a JSON array of objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    Single,
    Collection,
}

impl SchemaKind {
    /// Human-readable name used in CLI output and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            SchemaKind::Single => "single",
            SchemaKind::Collection => "collection",
        }
    }
}

impl std::fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Opaque tag naming one of the resource record types in [`crate::resources`].
///
/// Carried by a [`ResolvedRoute`]; the decoder dispatches on it to pick the
/// concrete record type. One variant per single-resource schema — collection
/// responses reuse the same tag with [`SchemaKind::Collection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaId {
    ShopCoupon,
    CustomerDownload,
    Customer,
    OrderNote,
    ShopOrderRefund,
    ShopOrder,
    ProductAttributeTerm,
    ProductAttribute,
    ProductCategory,
    ProductReview,
    ProductShippingClass,
    ProductTag,
    Product,
    ProductVariation,
    SalesReport,
    TopSellersReport,
    ReportOrderTotal,
    ReportProductTotal,
    ReportCustomerTotal,
    ReportCouponTotal,
    ReportReviewTotal,
    Report,
    ShippingZone,
    ShippingZoneLocation,
    ShippingZoneMethod,
    TaxClass,
    TaxRate,
    Webhook,
    SystemStatus,
    SystemStatusTool,
    ShippingMethod,
    PaymentGateway,
    DataIndex,
    DataContinent,
    DataCountry,
    DataCurrency,
}

impl SchemaId {
    /// The record type's name, as shown in CLI output and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            SchemaId::ShopCoupon => "ShopCoupon",
            SchemaId::CustomerDownload => "CustomerDownload",
            SchemaId::Customer => "Customer",
            SchemaId::OrderNote => "OrderNote",
            SchemaId::ShopOrderRefund => "ShopOrderRefund",
            SchemaId::ShopOrder => "ShopOrder",
            SchemaId::ProductAttributeTerm => "ProductAttributeTerm",
            SchemaId::ProductAttribute => "ProductAttribute",
            SchemaId::ProductCategory => "ProductCategory",
            SchemaId::ProductReview => "ProductReview",
            SchemaId::ProductShippingClass => "ProductShippingClass",
            SchemaId::ProductTag => "ProductTag",
            SchemaId::Product => "Product",
            SchemaId::ProductVariation => "ProductVariation",
            SchemaId::SalesReport => "SalesReport",
            SchemaId::TopSellersReport => "TopSellersReport",
            SchemaId::ReportOrderTotal => "ReportOrderTotal",
            SchemaId::ReportProductTotal => "ReportProductTotal",
            SchemaId::ReportCustomerTotal => "ReportCustomerTotal",
            SchemaId::ReportCouponTotal => "ReportCouponTotal",
            SchemaId::ReportReviewTotal => "ReportReviewTotal",
            SchemaId::Report => "Report",
            SchemaId::ShippingZone => "ShippingZone",
            SchemaId::ShippingZoneLocation => "ShippingZoneLocation",
            SchemaId::ShippingZoneMethod => "ShippingZoneMethod",
            SchemaId::TaxClass => "TaxClass",
            SchemaId::TaxRate => "TaxRate",
            SchemaId::Webhook => "Webhook",
            SchemaId::SystemStatus => "SystemStatus",
            SchemaId::SystemStatusTool => "SystemStatusTool",
            SchemaId::ShippingMethod => "ShippingMethod",
            SchemaId::PaymentGateway => "PaymentGateway",
            SchemaId::DataIndex => "DataIndex",
            SchemaId::DataContinent => "DataContinent",
            SchemaId::DataCountry => "DataCountry",
            SchemaId::DataCurrency => "DataCurrency",
        }
    }
}

impl std::fmt::Display for SchemaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a successful path resolution: which schema applies and whether
/// the body is a single resource or a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedRoute {
    pub kind: SchemaKind,
    pub schema: SchemaId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_type_names() {
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!([1, 2])), "array");
        assert_eq!(json_type_name(&json!({"a": 1})), "object");
        assert_eq!(json_type_name(&json!("x")), "string");
    }

    #[test]
    fn schema_kind_display() {
        assert_eq!(SchemaKind::Single.to_string(), "single");
        assert_eq!(SchemaKind::Collection.to_string(), "collection");
    }

    #[test]
    fn schema_id_name() {
        assert_eq!(SchemaId::ShopOrder.name(), "ShopOrder");
        assert_eq!(SchemaId::DataCurrency.to_string(), "DataCurrency");
    }
}
