//! Decoding of response bodies into typed resources.
//!
//! A resolved route fixes two things about a response body: its shape (a
//! single JSON object or an array of them) and the record type of each
//! object. [`decode`] enforces the shape first, then deserializes every
//! object against the route's schema.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::DecodeError;
use crate::resources::{
    Customer, CustomerDownload, DataContinent, DataCountry, DataCurrency, DataIndex, OrderNote,
    PaymentGateway, Product, ProductAttribute, ProductAttributeTerm, ProductCategory,
    ProductReview, ProductShippingClass, ProductTag, ProductVariation, Report, ReportTotalsEntry,
    SalesReport, ShippingMethod, ShippingZone, ShippingZoneLocation, ShippingZoneMethod,
    ShopCoupon, ShopOrder, ShopOrderRefund, SystemStatus, SystemStatusTool, TaxClass, TaxRate,
    TopSellersReport, Webhook,
};
use crate::types::{json_type_name, ResolvedRoute, SchemaId, SchemaKind};

/// A decoded resource record, tagged by its schema.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource {
    ShopCoupon(ShopCoupon),
    CustomerDownload(CustomerDownload),
    Customer(Customer),
    OrderNote(OrderNote),
    ShopOrderRefund(ShopOrderRefund),
    ShopOrder(Box<ShopOrder>),
    ProductAttributeTerm(ProductAttributeTerm),
    ProductAttribute(ProductAttribute),
    ProductCategory(ProductCategory),
    ProductReview(ProductReview),
    ProductShippingClass(ProductShippingClass),
    ProductTag(ProductTag),
    Product(Box<Product>),
    ProductVariation(Box<ProductVariation>),
    SalesReport(SalesReport),
    TopSellersReport(TopSellersReport),
    ReportOrderTotal(ReportTotalsEntry),
    ReportProductTotal(ReportTotalsEntry),
    ReportCustomerTotal(ReportTotalsEntry),
    ReportCouponTotal(ReportTotalsEntry),
    ReportReviewTotal(ReportTotalsEntry),
    Report(Report),
    ShippingZone(ShippingZone),
    ShippingZoneLocation(ShippingZoneLocation),
    ShippingZoneMethod(ShippingZoneMethod),
    TaxClass(TaxClass),
    TaxRate(TaxRate),
    Webhook(Webhook),
    SystemStatus(Box<SystemStatus>),
    SystemStatusTool(SystemStatusTool),
    ShippingMethod(ShippingMethod),
    PaymentGateway(PaymentGateway),
    DataIndex(DataIndex),
    DataContinent(DataContinent),
    DataCountry(DataCountry),
    DataCurrency(DataCurrency),
}

impl Resource {
    /// The schema this record was decoded against.
    pub fn schema(&self) -> SchemaId {
        match self {
            Resource::ShopCoupon(_) => SchemaId::ShopCoupon,
            Resource::CustomerDownload(_) => SchemaId::CustomerDownload,
            Resource::Customer(_) => SchemaId::Customer,
            Resource::OrderNote(_) => SchemaId::OrderNote,
            Resource::ShopOrderRefund(_) => SchemaId::ShopOrderRefund,
            Resource::ShopOrder(_) => SchemaId::ShopOrder,
            Resource::ProductAttributeTerm(_) => SchemaId::ProductAttributeTerm,
            Resource::ProductAttribute(_) => SchemaId::ProductAttribute,
            Resource::ProductCategory(_) => SchemaId::ProductCategory,
            Resource::ProductReview(_) => SchemaId::ProductReview,
            Resource::ProductShippingClass(_) => SchemaId::ProductShippingClass,
            Resource::ProductTag(_) => SchemaId::ProductTag,
            Resource::Product(_) => SchemaId::Product,
            Resource::ProductVariation(_) => SchemaId::ProductVariation,
            Resource::SalesReport(_) => SchemaId::SalesReport,
            Resource::TopSellersReport(_) => SchemaId::TopSellersReport,
            Resource::ReportOrderTotal(_) => SchemaId::ReportOrderTotal,
            Resource::ReportProductTotal(_) => SchemaId::ReportProductTotal,
            Resource::ReportCustomerTotal(_) => SchemaId::ReportCustomerTotal,
            Resource::ReportCouponTotal(_) => SchemaId::ReportCouponTotal,
            Resource::ReportReviewTotal(_) => SchemaId::ReportReviewTotal,
            Resource::Report(_) => SchemaId::Report,
            Resource::ShippingZone(_) => SchemaId::ShippingZone,
            Resource::ShippingZoneLocation(_) => SchemaId::ShippingZoneLocation,
            Resource::ShippingZoneMethod(_) => SchemaId::ShippingZoneMethod,
            Resource::TaxClass(_) => SchemaId::TaxClass,
            Resource::TaxRate(_) => SchemaId::TaxRate,
            Resource::Webhook(_) => SchemaId::Webhook,
            Resource::SystemStatus(_) => SchemaId::SystemStatus,
            Resource::SystemStatusTool(_) => SchemaId::SystemStatusTool,
            Resource::ShippingMethod(_) => SchemaId::ShippingMethod,
            Resource::PaymentGateway(_) => SchemaId::PaymentGateway,
            Resource::DataIndex(_) => SchemaId::DataIndex,
            Resource::DataContinent(_) => SchemaId::DataContinent,
            Resource::DataCountry(_) => SchemaId::DataCountry,
            Resource::DataCurrency(_) => SchemaId::DataCurrency,
        }
    }
}

/// A decoded response body: one record or a list of them.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Single(Resource),
    Collection(Vec<Resource>),
}

impl Payload {
    pub fn kind(&self) -> SchemaKind {
        match self {
            Payload::Single(_) => SchemaKind::Single,
            Payload::Collection(_) => SchemaKind::Collection,
        }
    }

    /// Number of records: 1 for a single, the element count for a collection.
    pub fn count(&self) -> usize {
        match self {
            Payload::Single(_) => 1,
            Payload::Collection(items) => items.len(),
        }
    }
}

/// Decodes a response body against a resolved route.
///
/// A collection route requires a JSON array and a single route a JSON
/// object; anything else is a shape error. Each object is then
/// deserialized against the route's schema, with collection failures
/// reported under the element's index (`/0`, `/1`, ...).
pub fn decode(route: ResolvedRoute, body: &Value) -> Result<Payload, DecodeError> {
    match route.kind {
        SchemaKind::Single => {
            if !body.is_object() {
                return Err(DecodeError::Shape {
                    schema: route.schema.name(),
                    expected: "object",
                    actual: json_type_name(body),
                });
            }
            let resource = decode_resource(route.schema, body, String::new())?;
            Ok(Payload::Single(resource))
        }
        SchemaKind::Collection => {
            let items = body.as_array().ok_or(DecodeError::Shape {
                schema: route.schema.name(),
                expected: "array",
                actual: json_type_name(body),
            })?;
            let mut resources = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                resources.push(decode_resource(route.schema, item, format!("/{index}"))?);
            }
            Ok(Payload::Collection(resources))
        }
    }
}

/// Parses `body` as JSON and decodes it against `route`.
pub fn decode_str(route: ResolvedRoute, body: &str) -> Result<Payload, DecodeError> {
    let value: Value = serde_json::from_str(body).map_err(|source| DecodeError::InvalidJson {
        source,
    })?;
    decode(route, &value)
}

/// Reads a JSON document from disk.
pub fn load_json(path: &Path) -> Result<Value, DecodeError> {
    if !path.exists() {
        return Err(DecodeError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = fs::read_to_string(path).map_err(|source| DecodeError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| DecodeError::InvalidJson { source })
}

fn decode_resource(
    schema: SchemaId,
    value: &Value,
    path: String,
) -> Result<Resource, DecodeError> {
    if !value.is_object() {
        return Err(DecodeError::Validation {
            schema: schema.name(),
            path,
            message: format!("expected an object, found {}", json_type_name(value)),
        });
    }

    fn parse<T: serde::de::DeserializeOwned>(
        schema: SchemaId,
        value: &Value,
        path: String,
        wrap: impl FnOnce(T) -> Resource,
    ) -> Result<Resource, DecodeError> {
        serde_json::from_value(value.clone())
            .map(wrap)
            .map_err(|err| DecodeError::Validation {
                schema: schema.name(),
                path,
                message: err.to_string(),
            })
    }

    match schema {
        SchemaId::ShopCoupon => parse(schema, value, path, Resource::ShopCoupon),
        SchemaId::CustomerDownload => parse(schema, value, path, Resource::CustomerDownload),
        SchemaId::Customer => parse(schema, value, path, Resource::Customer),
        SchemaId::OrderNote => parse(schema, value, path, Resource::OrderNote),
        SchemaId::ShopOrderRefund => parse(schema, value, path, Resource::ShopOrderRefund),
        SchemaId::ShopOrder => parse(schema, value, path, |order| {
            Resource::ShopOrder(Box::new(order))
        }),
        SchemaId::ProductAttributeTerm => {
            parse(schema, value, path, Resource::ProductAttributeTerm)
        }
        SchemaId::ProductAttribute => parse(schema, value, path, Resource::ProductAttribute),
        SchemaId::ProductCategory => parse(schema, value, path, Resource::ProductCategory),
        SchemaId::ProductReview => parse(schema, value, path, Resource::ProductReview),
        SchemaId::ProductShippingClass => {
            parse(schema, value, path, Resource::ProductShippingClass)
        }
        SchemaId::ProductTag => parse(schema, value, path, Resource::ProductTag),
        SchemaId::Product => parse(schema, value, path, |product| {
            Resource::Product(Box::new(product))
        }),
        SchemaId::ProductVariation => parse(schema, value, path, |variation| {
            Resource::ProductVariation(Box::new(variation))
        }),
        SchemaId::SalesReport => parse(schema, value, path, Resource::SalesReport),
        SchemaId::TopSellersReport => parse(schema, value, path, Resource::TopSellersReport),
        SchemaId::ReportOrderTotal => parse(schema, value, path, Resource::ReportOrderTotal),
        SchemaId::ReportProductTotal => parse(schema, value, path, Resource::ReportProductTotal),
        SchemaId::ReportCustomerTotal => {
            parse(schema, value, path, Resource::ReportCustomerTotal)
        }
        SchemaId::ReportCouponTotal => parse(schema, value, path, Resource::ReportCouponTotal),
        SchemaId::ReportReviewTotal => parse(schema, value, path, Resource::ReportReviewTotal),
        SchemaId::Report => parse(schema, value, path, Resource::Report),
        SchemaId::ShippingZone => parse(schema, value, path, Resource::ShippingZone),
        SchemaId::ShippingZoneLocation => {
            parse(schema, value, path, Resource::ShippingZoneLocation)
        }
        SchemaId::ShippingZoneMethod => parse(schema, value, path, Resource::ShippingZoneMethod),
        SchemaId::TaxClass => parse(schema, value, path, Resource::TaxClass),
        SchemaId::TaxRate => parse(schema, value, path, Resource::TaxRate),
        SchemaId::Webhook => parse(schema, value, path, Resource::Webhook),
        SchemaId::SystemStatus => parse(schema, value, path, |status| {
            Resource::SystemStatus(Box::new(status))
        }),
        SchemaId::SystemStatusTool => parse(schema, value, path, Resource::SystemStatusTool),
        SchemaId::ShippingMethod => parse(schema, value, path, Resource::ShippingMethod),
        SchemaId::PaymentGateway => parse(schema, value, path, Resource::PaymentGateway),
        SchemaId::DataIndex => parse(schema, value, path, Resource::DataIndex),
        SchemaId::DataContinent => parse(schema, value, path, Resource::DataContinent),
        SchemaId::DataCountry => parse(schema, value, path, Resource::DataCountry),
        SchemaId::DataCurrency => parse(schema, value, path, Resource::DataCurrency),
    }
}
