//! Resource record types of the WooCommerce v3 REST API.
//!
//! Flat records of optional fields, decoded with serde. Unknown JSON fields
//! are ignored so responses from newer API versions still decode; a present
//! field with the wrong type or an enum value outside its closed set fails
//! validation. The only required field in the catalogue is [`TaxClass::name`].

use serde::Deserialize;
use serde_json::Value;

// --- Shared nested records ---

/// Arbitrary key/value metadata attached to most resources.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MetaData {
    pub id: Option<i64>,
    pub key: Option<String>,
    /// String or object, depending on the plugin that wrote it.
    pub value: Option<Value>,
    pub display_key: Option<String>,
    pub display_value: Option<String>,
}

/// Billing address.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BillingAddress {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub address_1: Option<String>,
    pub address_2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Shipping address.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShippingAddress {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub address_1: Option<String>,
    pub address_2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
}

/// Per-rate tax amounts on a line item.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LineTax {
    pub id: Option<i64>,
    pub total: Option<String>,
    pub subtotal: Option<String>,
    pub refund_total: Option<f64>,
}

/// Product/variation image.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Image {
    pub id: Option<i64>,
    pub date_created: Option<String>,
    pub date_created_gmt: Option<String>,
    pub date_modified: Option<String>,
    pub date_modified_gmt: Option<String>,
    pub src: Option<String>,
    pub name: Option<String>,
    pub alt: Option<String>,
}

/// A downloadable file attached to a product or variation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Download {
    pub id: Option<String>,
    pub name: Option<String>,
    pub file: Option<String>,
}

/// Form control type of a gateway/shipping-method setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingType {
    Text,
    Email,
    Number,
    Color,
    Password,
    Textarea,
    Select,
    Multiselect,
    Radio,
    ImageWidth,
    Checkbox,
    Class,
    Order,
}

/// Settings block embedded in payment gateways and shipping zone methods.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SettingDefinition {
    pub id: Option<String>,
    pub label: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub setting_type: Option<SettingType>,
    pub value: Option<String>,
    pub default: Option<String>,
    pub tip: Option<String>,
    pub placeholder: Option<String>,
}

// --- Coupons ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    Percent,
    FixedCart,
    FixedProduct,
}

/// A shop coupon.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShopCoupon {
    pub id: Option<i64>,
    pub code: Option<String>,
    /// Always numeric, even for percentage discounts.
    pub amount: Option<String>,
    pub date_created: Option<String>,
    pub date_created_gmt: Option<String>,
    pub date_modified: Option<String>,
    pub date_modified_gmt: Option<String>,
    pub discount_type: Option<DiscountType>,
    pub description: Option<String>,
    pub date_expires: Option<String>,
    pub date_expires_gmt: Option<String>,
    pub usage_count: Option<i64>,
    pub individual_use: Option<bool>,
    pub product_ids: Option<Vec<i64>>,
    pub excluded_product_ids: Option<Vec<i64>>,
    pub usage_limit: Option<i64>,
    pub usage_limit_per_user: Option<i64>,
    pub limit_usage_to_x_items: Option<i64>,
    pub free_shipping: Option<bool>,
    pub product_categories: Option<Vec<i64>>,
    pub excluded_product_categories: Option<Vec<i64>>,
    pub exclude_sale_items: Option<bool>,
    pub minimum_amount: Option<String>,
    pub maximum_amount: Option<String>,
    pub email_restrictions: Option<Vec<String>>,
    pub used_by: Option<Vec<i64>>,
    pub meta_data: Option<Vec<MetaData>>,
}

// --- Customers ---

/// File details of a customer download.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DownloadFile {
    pub name: Option<String>,
    pub file: Option<String>,
}

/// A download a customer has access to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CustomerDownload {
    pub download_id: Option<String>,
    pub download_url: Option<String>,
    pub product_id: Option<i64>,
    pub product_name: Option<String>,
    pub download_name: Option<String>,
    pub order_id: Option<i64>,
    pub order_key: Option<String>,
    pub downloads_remaining: Option<String>,
    pub access_expires: Option<String>,
    pub access_expires_gmt: Option<String>,
    pub file: Option<DownloadFile>,
}

/// A registered customer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Customer {
    pub id: Option<i64>,
    pub date_created: Option<String>,
    pub date_created_gmt: Option<String>,
    pub date_modified: Option<String>,
    pub date_modified_gmt: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub billing: Option<BillingAddress>,
    pub shipping: Option<ShippingAddress>,
    pub is_paying_customer: Option<bool>,
    pub avatar_url: Option<String>,
    pub meta_data: Option<Vec<MetaData>>,
}

// --- Orders ---

/// A note attached to an order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderNote {
    pub id: Option<i64>,
    pub author: Option<String>,
    pub date_created: Option<String>,
    pub date_created_gmt: Option<String>,
    pub note: Option<String>,
    /// When true the note is shown to the customer.
    pub customer_note: Option<bool>,
    pub added_by_user: Option<bool>,
}

/// A product line on an order or refund.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderLineItem {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub parent_name: Option<String>,
    pub product_id: Option<i64>,
    pub variation_id: Option<i64>,
    pub quantity: Option<i64>,
    pub tax_class: Option<String>,
    pub subtotal: Option<String>,
    pub subtotal_tax: Option<String>,
    pub total: Option<String>,
    pub total_tax: Option<String>,
    pub taxes: Option<Vec<LineTax>>,
    pub meta_data: Option<Vec<MetaData>>,
    pub sku: Option<String>,
    pub price: Option<f64>,
    /// Amount refunded for this line, excluding taxes.
    pub refund_total: Option<f64>,
}

/// A refund issued against an order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShopOrderRefund {
    pub id: Option<i64>,
    pub date_created: Option<String>,
    pub date_created_gmt: Option<String>,
    pub amount: Option<String>,
    pub reason: Option<String>,
    pub refunded_by: Option<i64>,
    pub refunded_payment: Option<bool>,
    pub meta_data: Option<Vec<MetaData>>,
    pub line_items: Option<Vec<OrderLineItem>>,
    pub api_refund: Option<bool>,
    pub api_restock: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Processing,
    OnHold,
    Completed,
    Cancelled,
    Refunded,
    Failed,
}

/// ISO 4217 currency codes accepted by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Currency {
    AED, AFN, ALL, AMD, ANG, AOA, ARS, AUD, AWG, AZN,
    BAM, BBD, BDT, BGN, BHD, BIF, BMD, BND, BOB, BRL,
    BSD, BTC, BTN, BWP, BYR, BYN, BZD, CAD, CDF, CHF,
    CLP, CNY, COP, CRC, CUC, CUP, CVE, CZK, DJF, DKK,
    DOP, DZD, EGP, ERN, ETB, EUR, FJD, FKP, GBP, GEL,
    GGP, GHS, GIP, GMD, GNF, GTQ, GYD, HKD, HNL, HRK,
    HTG, HUF, IDR, ILS, IMP, INR, IQD, IRR, IRT, ISK,
    JEP, JMD, JOD, JPY, KES, KGS, KHR, KMF, KPW, KRW,
    KWD, KYD, KZT, LAK, LBP, LKR, LRD, LSL, LYD, MAD,
    MDL, MGA, MKD, MMK, MNT, MOP, MRU, MUR, MVR, MWK,
    MXN, MYR, MZN, NAD, NGN, NIO, NOK, NPR, NZD, OMR,
    PAB, PEN, PGK, PHP, PKR, PLN, PRB, PYG, QAR, RON,
    RSD, RUB, RWF, SAR, SBD, SCR, SDG, SEK, SGD, SHP,
    SLL, SOS, SRD, SSP, STN, SYP, SZL, THB, TJS, TMT,
    TND, TOP, TRY, TTD, TWD, TZS, UAH, UGX, USD, UYU,
    UZS, VEF, VES, VND, VUV, WST, XAF, XCD, XOF, XPF,
    YER, ZAR, ZMW,
}

/// A tax rate applied across an order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaxLine {
    pub id: Option<i64>,
    pub rate_code: Option<String>,
    pub rate_id: Option<i64>,
    pub label: Option<String>,
    pub compound: Option<bool>,
    pub tax_total: Option<String>,
    pub shipping_tax_total: Option<String>,
    pub meta_data: Option<Vec<MetaData>>,
}

/// A shipping charge on an order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShippingLine {
    pub id: Option<i64>,
    pub method_title: Option<String>,
    pub method_id: Option<String>,
    pub instance_id: Option<String>,
    pub total: Option<String>,
    pub total_tax: Option<String>,
    pub taxes: Option<Vec<LineTax>>,
    pub meta_data: Option<Vec<MetaData>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxStatus {
    Taxable,
    Shipping,
    None,
}

/// A fee charged on an order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeeLine {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub tax_class: Option<String>,
    pub tax_status: Option<TaxStatus>,
    pub total: Option<String>,
    pub total_tax: Option<String>,
    pub taxes: Option<Vec<LineTax>>,
    pub meta_data: Option<Vec<MetaData>>,
}

/// A coupon applied to an order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CouponLine {
    pub id: Option<i64>,
    pub code: Option<String>,
    pub discount: Option<String>,
    pub discount_tax: Option<String>,
    pub meta_data: Option<Vec<MetaData>>,
}

/// Condensed refund reference embedded in an order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RefundSummary {
    pub id: Option<i64>,
    pub reason: Option<String>,
    pub total: Option<String>,
}

/// A shop order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShopOrder {
    pub id: Option<i64>,
    pub parent_id: Option<i64>,
    pub number: Option<String>,
    pub order_key: Option<String>,
    pub created_via: Option<String>,
    pub version: Option<String>,
    pub status: Option<OrderStatus>,
    pub currency: Option<Currency>,
    pub date_created: Option<String>,
    pub date_created_gmt: Option<String>,
    pub date_modified: Option<String>,
    pub date_modified_gmt: Option<String>,
    pub discount_total: Option<String>,
    pub discount_tax: Option<String>,
    pub shipping_total: Option<String>,
    pub shipping_tax: Option<String>,
    /// Sum of line item taxes only.
    pub cart_tax: Option<String>,
    pub total: Option<String>,
    pub total_tax: Option<String>,
    pub prices_include_tax: Option<bool>,
    /// 0 for guest checkouts.
    pub customer_id: Option<i64>,
    pub customer_ip_address: Option<String>,
    pub customer_user_agent: Option<String>,
    pub customer_note: Option<String>,
    pub billing: Option<BillingAddress>,
    pub shipping: Option<ShippingAddress>,
    pub payment_method: Option<String>,
    pub payment_method_title: Option<String>,
    pub transaction_id: Option<String>,
    pub date_paid: Option<String>,
    pub date_paid_gmt: Option<String>,
    pub date_completed: Option<String>,
    pub date_completed_gmt: Option<String>,
    pub cart_hash: Option<String>,
    pub meta_data: Option<Vec<MetaData>>,
    pub line_items: Option<Vec<OrderLineItem>>,
    pub tax_lines: Option<Vec<TaxLine>>,
    pub shipping_lines: Option<Vec<ShippingLine>>,
    pub fee_lines: Option<Vec<FeeLine>>,
    pub coupon_lines: Option<Vec<CouponLine>>,
    pub refunds: Option<Vec<RefundSummary>>,
    pub set_paid: Option<bool>,
}

// --- Products ---

/// A term of a product attribute (e.g. "XL" for "size").
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductAttributeTerm {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub menu_order: Option<i64>,
    pub count: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    Select,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeOrderBy {
    MenuOrder,
    Name,
    NameNum,
    Id,
}

/// A global product attribute.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductAttribute {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub slug: Option<String>,
    #[serde(rename = "type")]
    pub attribute_type: Option<AttributeType>,
    pub order_by: Option<AttributeOrderBy>,
    pub has_archives: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryDisplay {
    Default,
    Products,
    Subcategories,
    Both,
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductCategory {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub parent: Option<i64>,
    pub description: Option<String>,
    pub display: Option<CategoryDisplay>,
    pub image: Option<Image>,
    pub menu_order: Option<i64>,
    pub count: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Approved,
    Hold,
    Spam,
    Unspam,
    Trash,
    Untrash,
}

/// Avatar URLs keyed by pixel size.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReviewerAvatarUrls {
    #[serde(rename = "24")]
    pub size_24: Option<String>,
    #[serde(rename = "48")]
    pub size_48: Option<String>,
    #[serde(rename = "96")]
    pub size_96: Option<String>,
}

/// A product review.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductReview {
    pub id: Option<i64>,
    pub date_created: Option<String>,
    pub date_created_gmt: Option<String>,
    pub product_id: Option<i64>,
    pub status: Option<ReviewStatus>,
    pub reviewer: Option<String>,
    pub reviewer_email: Option<String>,
    pub review: Option<String>,
    /// 0 to 5.
    pub rating: Option<i64>,
    pub verified: Option<bool>,
    pub reviewer_avatar_urls: Option<ReviewerAvatarUrls>,
}

/// A product shipping class.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductShippingClass {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub count: Option<i64>,
}

/// A product tag.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductTag {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub count: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Simple,
    Grouped,
    External,
    Variable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Draft,
    Pending,
    Private,
    Publish,
    Future,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogVisibility {
    Visible,
    Catalog,
    Search,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Instock,
    Outofstock,
    Onbackorder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backorders {
    No,
    Notify,
    Yes,
}

/// Product dimensions, in the store's configured unit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Dimensions {
    pub length: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
}

/// Category reference embedded in a product.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryRef {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub slug: Option<String>,
}

/// Tag reference embedded in a product.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TagRef {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub slug: Option<String>,
}

/// An attribute with its available options, embedded in a product.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductAttributeRef {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub position: Option<i64>,
    pub visible: Option<bool>,
    /// Whether the attribute can drive variations.
    pub variation: Option<bool>,
    pub options: Option<Vec<String>>,
}

/// A single selected attribute term (default or variation selection).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SelectedAttribute {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub option: Option<String>,
}

/// A product.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub permalink: Option<String>,
    pub date_created: Option<String>,
    pub date_created_gmt: Option<String>,
    pub date_modified: Option<String>,
    pub date_modified_gmt: Option<String>,
    #[serde(rename = "type")]
    pub product_type: Option<ProductType>,
    pub status: Option<ProductStatus>,
    pub featured: Option<bool>,
    pub catalog_visibility: Option<CatalogVisibility>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub sku: Option<String>,
    pub price: Option<String>,
    pub regular_price: Option<String>,
    pub sale_price: Option<String>,
    pub date_on_sale_from: Option<String>,
    pub date_on_sale_from_gmt: Option<String>,
    pub date_on_sale_to: Option<String>,
    pub date_on_sale_to_gmt: Option<String>,
    pub price_html: Option<String>,
    pub on_sale: Option<bool>,
    pub purchasable: Option<bool>,
    pub total_sales: Option<i64>,
    #[serde(rename = "virtual")]
    pub is_virtual: Option<bool>,
    pub downloadable: Option<bool>,
    pub downloads: Option<Vec<Download>>,
    pub download_limit: Option<i64>,
    pub download_expiry: Option<i64>,
    /// Only for external products.
    pub external_url: Option<String>,
    pub button_text: Option<String>,
    pub tax_status: Option<TaxStatus>,
    pub tax_class: Option<String>,
    pub manage_stock: Option<bool>,
    pub stock_quantity: Option<i64>,
    pub stock_status: Option<StockStatus>,
    pub backorders: Option<Backorders>,
    pub backorders_allowed: Option<bool>,
    pub backordered: Option<bool>,
    pub low_stock_amount: Option<i64>,
    pub sold_individually: Option<bool>,
    pub weight: Option<String>,
    pub dimensions: Option<Dimensions>,
    pub shipping_required: Option<bool>,
    pub shipping_taxable: Option<bool>,
    pub shipping_class: Option<String>,
    /// The upstream API serializes this ID as a string.
    pub shipping_class_id: Option<String>,
    pub reviews_allowed: Option<bool>,
    pub average_rating: Option<String>,
    pub rating_count: Option<i64>,
    pub related_ids: Option<Vec<i64>>,
    pub upsell_ids: Option<Vec<i64>>,
    pub cross_sell_ids: Option<Vec<i64>>,
    pub parent_id: Option<i64>,
    pub purchase_note: Option<String>,
    pub categories: Option<Vec<CategoryRef>>,
    pub tags: Option<Vec<TagRef>>,
    pub images: Option<Vec<Image>>,
    pub attributes: Option<Vec<ProductAttributeRef>>,
    pub default_attributes: Option<Vec<SelectedAttribute>>,
    pub variations: Option<Vec<i64>>,
    pub grouped_products: Option<Vec<i64>>,
    pub menu_order: Option<i64>,
    pub meta_data: Option<Vec<MetaData>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariationStatus {
    Draft,
    Pending,
    Private,
    Publish,
}

/// A variation of a variable product.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductVariation {
    pub id: Option<i64>,
    pub date_created: Option<String>,
    pub date_modified: Option<String>,
    pub description: Option<String>,
    pub permalink: Option<String>,
    pub sku: Option<String>,
    pub price: Option<String>,
    pub regular_price: Option<String>,
    pub sale_price: Option<String>,
    pub date_on_sale_from: Option<String>,
    pub date_on_sale_from_gmt: Option<String>,
    pub date_on_sale_to: Option<String>,
    pub date_on_sale_to_gmt: Option<String>,
    pub on_sale: Option<bool>,
    pub status: Option<VariationStatus>,
    pub purchasable: Option<bool>,
    #[serde(rename = "virtual")]
    pub is_virtual: Option<bool>,
    pub downloadable: Option<bool>,
    pub downloads: Option<Vec<Download>>,
    pub download_limit: Option<i64>,
    pub download_expiry: Option<i64>,
    pub tax_status: Option<TaxStatus>,
    pub tax_class: Option<String>,
    pub manage_stock: Option<bool>,
    pub stock_quantity: Option<i64>,
    pub stock_status: Option<StockStatus>,
    pub backorders: Option<Backorders>,
    pub backorders_allowed: Option<bool>,
    pub backordered: Option<bool>,
    pub low_stock_amount: Option<i64>,
    pub weight: Option<String>,
    pub dimensions: Option<Dimensions>,
    pub shipping_class: Option<String>,
    pub shipping_class_id: Option<String>,
    pub image: Option<Image>,
    pub attributes: Option<Vec<SelectedAttribute>>,
    pub menu_order: Option<i64>,
    pub meta_data: Option<Vec<MetaData>>,
}

// --- Reports ---

/// Sales totals over a reporting period.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SalesReport {
    pub total_sales: Option<String>,
    pub net_sales: Option<String>,
    pub average_sales: Option<String>,
    pub total_orders: Option<i64>,
    pub total_items: Option<i64>,
    pub total_tax: Option<String>,
    pub total_shipping: Option<String>,
    pub total_refunds: Option<i64>,
    pub total_discount: Option<i64>,
    pub totals_grouped_by: Option<String>,
    pub totals: Option<Vec<i64>>,
}

/// A best-selling product over a reporting period.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopSellersReport {
    pub name: Option<String>,
    pub product_id: Option<i64>,
    pub quantity: Option<i64>,
}

/// A totals row shared by the orders/products/customers/coupons/reviews
/// totals reports: slug, display name, count.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportTotalsEntry {
    pub slug: Option<String>,
    pub name: Option<String>,
    pub total: Option<String>,
}

/// An available report.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Report {
    pub slug: Option<String>,
    pub description: Option<String>,
}

// --- Shipping ---

/// A shipping zone.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShippingZone {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub order: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneLocationType {
    Postcode,
    State,
    Country,
    Continent,
}

/// A location covered by a shipping zone.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShippingZoneLocation {
    pub code: Option<String>,
    #[serde(rename = "type")]
    pub location_type: Option<ZoneLocationType>,
}

/// A shipping method instance attached to a zone.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShippingZoneMethod {
    pub id: Option<i64>,
    pub instance_id: Option<i64>,
    pub title: Option<String>,
    pub order: Option<i64>,
    pub enabled: Option<bool>,
    pub method_id: Option<String>,
    pub method_title: Option<String>,
    pub method_description: Option<String>,
    pub settings: Option<SettingDefinition>,
}

/// A shipping method offered by the store.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShippingMethod {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

// --- Taxes ---

/// A tax class. `name` is the only required field in the catalogue.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaxClass {
    pub slug: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaxRateClass {
    Standard,
    ReducedRate,
    ZeroRate,
}

/// A tax rate.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaxRate {
    pub id: Option<i64>,
    pub country: Option<String>,
    pub state: Option<String>,
    /// Deprecated upstream in favor of `postcodes`.
    pub postcode: Option<String>,
    /// Deprecated upstream in favor of `cities`.
    pub city: Option<String>,
    pub rate: Option<String>,
    pub name: Option<String>,
    pub priority: Option<i64>,
    pub compound: Option<bool>,
    pub shipping: Option<bool>,
    pub order: Option<i64>,
    #[serde(rename = "class")]
    pub rate_class: Option<TaxRateClass>,
    pub postcodes: Option<Vec<String>>,
    pub cities: Option<Vec<String>>,
}

// --- Webhooks ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebhookStatus {
    Active,
    Paused,
    Disabled,
}

/// A registered webhook.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Webhook {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub status: Option<WebhookStatus>,
    pub topic: Option<String>,
    pub resource: Option<String>,
    pub event: Option<String>,
    pub hooks: Option<Vec<String>>,
    pub delivery_url: Option<String>,
    pub secret: Option<String>,
    pub date_created: Option<String>,
    pub date_created_gmt: Option<String>,
    pub date_modified: Option<String>,
    pub date_modified_gmt: Option<String>,
}

// --- System status ---

/// Server and WordPress environment details.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Environment {
    pub home_url: Option<String>,
    pub site_url: Option<String>,
    pub version: Option<String>,
    pub log_directory: Option<String>,
    pub log_directory_writable: Option<bool>,
    pub wp_version: Option<String>,
    pub wp_multisite: Option<bool>,
    pub wp_memory_limit: Option<i64>,
    pub wp_debug_mode: Option<bool>,
    pub wp_cron: Option<bool>,
    pub language: Option<String>,
    pub server_info: Option<String>,
    pub php_version: Option<String>,
    pub php_post_max_size: Option<i64>,
    pub php_max_execution_time: Option<i64>,
    pub php_max_input_vars: Option<i64>,
    pub curl_version: Option<String>,
    pub suhosin_installed: Option<bool>,
    pub max_upload_size: Option<i64>,
    pub mysql_version: Option<String>,
    pub mysql_version_string: Option<String>,
    pub default_timezone: Option<String>,
    pub fsockopen_or_curl_enabled: Option<bool>,
    pub soapclient_enabled: Option<bool>,
    pub domdocument_enabled: Option<bool>,
    pub gzip_enabled: Option<bool>,
    pub mbstring_enabled: Option<bool>,
    pub remote_post_successful: Option<bool>,
    pub remote_post_response: Option<String>,
    pub remote_get_successful: Option<bool>,
    pub remote_get_response: Option<String>,
}

/// Database layout details.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Database {
    pub wc_database_version: Option<String>,
    pub database_prefix: Option<String>,
    pub maxmind_geoip_database: Option<String>,
    pub database_tables: Option<Vec<String>>,
}

/// Active theme details.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Theme {
    pub name: Option<String>,
    pub version: Option<String>,
    pub version_latest: Option<String>,
    pub author_url: Option<String>,
    pub is_child_theme: Option<bool>,
    pub has_woocommerce_support: Option<bool>,
    pub has_woocommerce_file: Option<bool>,
    pub has_outdated_templates: Option<bool>,
    pub overrides: Option<Vec<String>>,
    pub parent_name: Option<String>,
    pub parent_version: Option<String>,
    pub parent_author_url: Option<String>,
}

/// Store-wide settings snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoreSettings {
    pub api_enabled: Option<bool>,
    pub force_ssl: Option<bool>,
    pub currency: Option<String>,
    pub currency_symbol: Option<String>,
    pub currency_position: Option<String>,
    pub thousand_separator: Option<String>,
    pub decimal_separator: Option<String>,
    pub number_of_decimals: Option<i64>,
    pub geolocation_enabled: Option<bool>,
    pub taxonomies: Option<Vec<String>>,
    pub product_visibility_terms: Option<Vec<String>>,
}

/// Security posture flags.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Security {
    pub secure_connection: Option<bool>,
    pub hide_errors: Option<bool>,
}

/// Full system status report.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SystemStatus {
    pub environment: Option<Environment>,
    pub database: Option<Database>,
    pub active_plugins: Option<Vec<String>>,
    pub inactive_plugins: Option<Vec<String>>,
    pub dropins_mu_plugins: Option<Vec<String>>,
    pub theme: Option<Theme>,
    pub settings: Option<StoreSettings>,
    pub security: Option<Security>,
    pub pages: Option<Vec<String>>,
    pub post_type_counts: Option<Vec<String>>,
}

/// A maintenance tool exposed by the system status API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SystemStatusTool {
    pub id: Option<String>,
    pub name: Option<String>,
    pub action: Option<String>,
    pub description: Option<String>,
    pub success: Option<bool>,
    pub message: Option<String>,
}

// --- Payment gateways ---

/// A payment gateway and its checkout configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaymentGateway {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub order: Option<i64>,
    pub enabled: Option<bool>,
    pub method_title: Option<String>,
    pub method_description: Option<String>,
    pub method_supports: Option<Vec<String>>,
    pub settings: Option<SettingDefinition>,
}

// --- Data endpoints ---

/// Index entry listing an available data resource.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataIndex {
    pub slug: Option<String>,
    pub description: Option<String>,
}

/// A state or province.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct State {
    pub code: Option<String>,
    pub name: Option<String>,
}

/// Country details as embedded in the continents endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Country {
    pub code: Option<String>,
    pub currency_code: Option<String>,
    pub currency_pos: Option<String>,
    pub decimal_sep: Option<String>,
    pub dimension_unit: Option<String>,
    pub name: Option<String>,
    pub num_decimals: Option<i64>,
    pub states: Option<Vec<State>>,
    pub thousand_sep: Option<String>,
    pub weight_unit: Option<String>,
}

/// A continent with its countries.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataContinent {
    pub code: Option<String>,
    pub name: Option<String>,
    pub countries: Option<Vec<Country>>,
}

/// A country with its states.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataCountry {
    pub code: Option<String>,
    pub name: Option<String>,
    pub states: Option<Vec<State>>,
}

/// A currency.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataCurrency {
    pub code: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn order_status_wire_names() {
        let status: OrderStatus = serde_json::from_value(json!("on-hold")).unwrap();
        assert_eq!(status, OrderStatus::OnHold);

        let status: OrderStatus = serde_json::from_value(json!("processing")).unwrap();
        assert_eq!(status, OrderStatus::Processing);

        // outside the closed set
        assert!(serde_json::from_value::<OrderStatus>(json!("shipped")).is_err());
    }

    #[test]
    fn tax_rate_class_wire_names() {
        let class: TaxRateClass = serde_json::from_value(json!("reduced-rate")).unwrap();
        assert_eq!(class, TaxRateClass::ReducedRate);
    }

    #[test]
    fn currency_codes_round_trip() {
        let currency: Currency = serde_json::from_value(json!("USD")).unwrap();
        assert_eq!(currency, Currency::USD);
        assert!(serde_json::from_value::<Currency>(json!("XXX")).is_err());
    }

    #[test]
    fn tax_class_requires_name() {
        let ok: TaxClass =
            serde_json::from_value(json!({"slug": "standard", "name": "Standard rate"})).unwrap();
        assert_eq!(ok.name, "Standard rate");

        let missing = serde_json::from_value::<TaxClass>(json!({"slug": "standard"}));
        assert!(missing.is_err());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let order: ShopOrder = serde_json::from_value(json!({
            "id": 727,
            "status": "processing",
            "some_future_field": {"nested": true}
        }))
        .unwrap();
        assert_eq!(order.id, Some(727));
        assert_eq!(order.status, Some(OrderStatus::Processing));
    }

    #[test]
    fn renamed_fields_decode() {
        let rate: TaxRate =
            serde_json::from_value(json!({"id": 72, "class": "zero-rate"})).unwrap();
        assert_eq!(rate.rate_class, Some(TaxRateClass::ZeroRate));

        let avatar: ReviewerAvatarUrls =
            serde_json::from_value(json!({"24": "https://example.com/a.png"})).unwrap();
        assert!(avatar.size_24.is_some());
    }

    #[test]
    fn meta_data_value_accepts_string_or_object() {
        let meta: MetaData =
            serde_json::from_value(json!({"id": 1, "key": "k", "value": "v"})).unwrap();
        assert_eq!(meta.value, Some(json!("v")));

        let meta: MetaData =
            serde_json::from_value(json!({"id": 2, "key": "k", "value": {"a": 1}})).unwrap();
        assert_eq!(meta.value, Some(json!({"a": 1})));
    }
}
