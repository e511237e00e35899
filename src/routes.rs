//! The fixed endpoint-to-schema route table.
//!
//! Each WooCommerce GET endpoint is written as a path template with literal
//! segments and braced parameter placeholders (e.g. `/orders/{order_id}/notes`).
//! The table is compiled once at construction and never mutated, so a single
//! [`RouteTable`] can be shared read-only across any number of callers.

use crate::types::{ResolvedRoute, SchemaId, SchemaKind};

use SchemaKind::{Collection, Single};

/// One segment matcher of a compiled route pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    /// Matches only a path segment equal to the text.
    Literal(&'static str),
    /// Matches any single non-empty path segment.
    Param(&'static str),
}

impl Segment {
    fn matches(&self, segment: &str) -> bool {
        match self {
            Segment::Literal(text) => *text == segment,
            Segment::Param(_) => !segment.is_empty(),
        }
    }
}

/// A compiled route: pattern plus the schema it selects.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    template: &'static str,
    segments: Vec<Segment>,
    kind: SchemaKind,
    schema: SchemaId,
}

impl RouteEntry {
    fn compile(template: &'static str, kind: SchemaKind, schema: SchemaId) -> Self {
        let segments = template
            .trim_start_matches('/')
            .split('/')
            .map(|s| match s.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                Some(name) => Segment::Param(name),
                None => Segment::Literal(s),
            })
            .collect();
        RouteEntry {
            template,
            segments,
            kind,
            schema,
        }
    }

    /// A pattern matches iff the segment counts agree and every matcher
    /// accepts its segment.
    fn matches(&self, segments: &[&str]) -> bool {
        self.segments.len() == segments.len()
            && self
                .segments
                .iter()
                .zip(segments)
                .all(|(matcher, segment)| matcher.matches(segment))
    }

    /// Tie-break weight: patterns with more literal segments win.
    fn literal_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Literal(_)))
            .count()
    }

    /// The source template, e.g. `/orders/{order_id}/refunds/{id}`.
    pub fn template(&self) -> &'static str {
        self.template
    }

    pub fn kind(&self) -> SchemaKind {
        self.kind
    }

    pub fn schema(&self) -> SchemaId {
        self.schema
    }
}

/// The endpoint table of the WooCommerce v3 REST API, copied verbatim from the
/// upstream API surface. Order matters only for the documented
/// literal-vs-parameter overlap (`/data/currencies/current` vs
/// `/data/currencies/{currency}`), which the literal-count tie-break resolves
/// regardless of position.
#[rustfmt::skip]
const ROUTE_DEFS: &[(&str, SchemaKind, SchemaId)] = &[
    ("/coupons", Collection, SchemaId::ShopCoupon),
    ("/coupons/{id}", Single, SchemaId::ShopCoupon),
    ("/customers/{customer_id}/downloads", Collection, SchemaId::CustomerDownload),
    ("/customers", Collection, SchemaId::Customer),
    ("/customers/{id}", Single, SchemaId::Customer),
    ("/orders/{order_id}/notes", Collection, SchemaId::OrderNote),
    ("/orders/{order_id}/notes/{id}", Single, SchemaId::OrderNote),
    ("/orders/{order_id}/refunds", Collection, SchemaId::ShopOrderRefund),
    ("/orders/{order_id}/refunds/{id}", Single, SchemaId::ShopOrderRefund),
    ("/orders", Collection, SchemaId::ShopOrder),
    ("/orders/{id}", Single, SchemaId::ShopOrder),
    ("/products/attributes/{attribute_id}/terms", Collection, SchemaId::ProductAttributeTerm),
    ("/products/attributes/{attribute_id}/terms/{id}", Single, SchemaId::ProductAttributeTerm),
    ("/products/attributes", Collection, SchemaId::ProductAttribute),
    ("/products/attributes/{id}", Single, SchemaId::ProductAttribute),
    ("/products/categories", Collection, SchemaId::ProductCategory),
    ("/products/categories/{id}", Single, SchemaId::ProductCategory),
    ("/products/reviews", Collection, SchemaId::ProductReview),
    ("/products/reviews/{id}", Single, SchemaId::ProductReview),
    ("/products/shipping_classes", Collection, SchemaId::ProductShippingClass),
    ("/products/shipping_classes/{id}", Single, SchemaId::ProductShippingClass),
    ("/products/tags", Collection, SchemaId::ProductTag),
    ("/products/tags/{id}", Single, SchemaId::ProductTag),
    ("/products", Collection, SchemaId::Product),
    ("/products/{id}", Single, SchemaId::Product),
    ("/products/{product_id}/variations", Collection, SchemaId::ProductVariation),
    ("/products/{product_id}/variations/{id}", Single, SchemaId::ProductVariation),
    ("/reports/sales", Collection, SchemaId::SalesReport),
    ("/reports/top_sellers", Collection, SchemaId::TopSellersReport),
    ("/reports/orders/totals", Collection, SchemaId::ReportOrderTotal),
    ("/reports/products/totals", Collection, SchemaId::ReportProductTotal),
    ("/reports/customers/totals", Collection, SchemaId::ReportCustomerTotal),
    ("/reports/coupons/totals", Collection, SchemaId::ReportCouponTotal),
    ("/reports/reviews/totals", Collection, SchemaId::ReportReviewTotal),
    ("/reports", Collection, SchemaId::Report),
    ("/shipping/zones", Collection, SchemaId::ShippingZone),
    ("/shipping/zones/{id}", Single, SchemaId::ShippingZone),
    ("/shipping/zones/{id}/locations", Collection, SchemaId::ShippingZoneLocation),
    ("/shipping/zones/{zone_id}/methods", Collection, SchemaId::ShippingZoneMethod),
    ("/shipping/zones/{zone_id}/methods/{instance_id}", Single, SchemaId::ShippingZoneMethod),
    ("/taxes/classes", Collection, SchemaId::TaxClass),
    ("/taxes/classes/{slug}", Single, SchemaId::TaxClass),
    ("/taxes", Collection, SchemaId::TaxRate),
    ("/taxes/{id}", Single, SchemaId::TaxRate),
    ("/webhooks", Collection, SchemaId::Webhook),
    ("/webhooks/{id}", Single, SchemaId::Webhook),
    ("/system_status", Single, SchemaId::SystemStatus),
    ("/system_status/tools", Collection, SchemaId::SystemStatusTool),
    ("/system_status/tools/{id}", Single, SchemaId::SystemStatusTool),
    ("/shipping_methods", Collection, SchemaId::ShippingMethod),
    ("/shipping_methods/{id}", Single, SchemaId::ShippingMethod),
    ("/payment_gateways", Collection, SchemaId::PaymentGateway),
    ("/payment_gateways/{id}", Single, SchemaId::PaymentGateway),
    ("/data", Single, SchemaId::DataIndex),
    ("/data/continents", Collection, SchemaId::DataContinent),
    ("/data/continents/{location}", Single, SchemaId::DataContinent),
    ("/data/countries", Collection, SchemaId::DataCountry),
    ("/data/countries/{location}", Single, SchemaId::DataCountry),
    ("/data/currencies", Collection, SchemaId::DataCurrency),
    ("/data/currencies/current", Single, SchemaId::DataCurrency),
    ("/data/currencies/{currency}", Single, SchemaId::DataCurrency),
];

/// Immutable collection of compiled routes, built once and queried many times.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Compile the fixed endpoint table.
    pub fn new() -> Self {
        let entries = ROUTE_DEFS
            .iter()
            .map(|&(template, kind, schema)| RouteEntry::compile(template, kind, schema))
            .collect();
        RouteTable { entries }
    }

    /// Find the best-matching entry for the given endpoint segments.
    ///
    /// Every entry is scanned; when several patterns of equal length match,
    /// the one with more literal segments wins (the fixed table never ties
    /// beyond that, and a residual tie would keep the earlier entry).
    pub fn find(&self, segments: &[&str]) -> Option<ResolvedRoute> {
        let mut best: Option<&RouteEntry> = None;
        for entry in &self.entries {
            if !entry.matches(segments) {
                continue;
            }
            match best {
                Some(current) if current.literal_count() >= entry.literal_count() => {}
                _ => best = Some(entry),
            }
        }
        best.map(|entry| ResolvedRoute {
            kind: entry.kind,
            schema: entry.schema,
        })
    }

    /// Iterate over all compiled entries, in table order.
    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}
