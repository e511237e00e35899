//! Integration tests for endpoint resolution.

use wc_schema::{Resolver, ResolveError, SchemaId, SchemaKind};

// === Resolution Basics ===

mod basics {
    use super::*;

    #[test]
    fn collection_endpoint() {
        let resolver = Resolver::new();
        let route = resolver.resolve("/wp-json/wc/v3/orders").unwrap();

        assert_eq!(route.kind, SchemaKind::Collection);
        assert_eq!(route.schema, SchemaId::ShopOrder);
    }

    #[test]
    fn single_endpoint() {
        let resolver = Resolver::new();
        let route = resolver.resolve("/wp-json/wc/v3/orders/727").unwrap();

        assert_eq!(route.kind, SchemaKind::Single);
        assert_eq!(route.schema, SchemaId::ShopOrder);
    }

    #[test]
    fn full_url_with_query_string() {
        let resolver = Resolver::new();
        let route = resolver
            .resolve("https://shop.example.com/wp-json/wc/v3/products?per_page=20&page=3")
            .unwrap();

        assert_eq!(route.kind, SchemaKind::Collection);
        assert_eq!(route.schema, SchemaId::Product);
    }

    #[test]
    fn nested_collection_endpoint() {
        let resolver = Resolver::new();
        let route = resolver.resolve("/wp-json/wc/v3/orders/123/notes").unwrap();

        assert_eq!(route.kind, SchemaKind::Collection);
        assert_eq!(route.schema, SchemaId::OrderNote);
    }

    #[test]
    fn doubly_parameterized_endpoint() {
        let resolver = Resolver::new();
        let route = resolver
            .resolve("/wp-json/wc/v3/orders/123/refunds/9")
            .unwrap();

        assert_eq!(route.kind, SchemaKind::Single);
        assert_eq!(route.schema, SchemaId::ShopOrderRefund);

        let route = resolver
            .resolve("/wp-json/wc/v3/products/42/variations/7")
            .unwrap();
        assert_eq!(route.kind, SchemaKind::Single);
        assert_eq!(route.schema, SchemaId::ProductVariation);
    }

    #[test]
    fn trailing_slash_is_accepted() {
        let resolver = Resolver::new();
        let route = resolver.resolve("/wp-json/wc/v3/orders/").unwrap();

        assert_eq!(route.kind, SchemaKind::Collection);
        assert_eq!(route.schema, SchemaId::ShopOrder);
    }
}

// === Literal vs Parameter Precedence ===

mod precedence {
    use super::*;

    #[test]
    fn literal_segment_beats_parameter() {
        let resolver = Resolver::new();

        // "current" also matches the {currency} placeholder; the literal
        // template must win.
        let route = resolver
            .resolve("/wp-json/wc/v3/data/currencies/current")
            .unwrap();
        assert_eq!(route.kind, SchemaKind::Single);
        assert_eq!(route.schema, SchemaId::DataCurrency);

        let route = resolver
            .resolve("/wp-json/wc/v3/data/currencies/EUR")
            .unwrap();
        assert_eq!(route.kind, SchemaKind::Single);
        assert_eq!(route.schema, SchemaId::DataCurrency);
    }

    #[test]
    fn products_subresources_beat_product_id() {
        let resolver = Resolver::new();

        // "categories" is a valid {id} by shape but must hit the literal
        // template instead.
        let route = resolver
            .resolve("/wp-json/wc/v3/products/categories")
            .unwrap();
        assert_eq!(route.kind, SchemaKind::Collection);
        assert_eq!(route.schema, SchemaId::ProductCategory);

        let route = resolver.resolve("/wp-json/wc/v3/products/42").unwrap();
        assert_eq!(route.kind, SchemaKind::Single);
        assert_eq!(route.schema, SchemaId::Product);
    }

    #[test]
    fn taxes_classes_beats_tax_id() {
        let resolver = Resolver::new();

        let route = resolver.resolve("/wp-json/wc/v3/taxes/classes").unwrap();
        assert_eq!(route.kind, SchemaKind::Collection);
        assert_eq!(route.schema, SchemaId::TaxClass);

        let route = resolver.resolve("/wp-json/wc/v3/taxes/17").unwrap();
        assert_eq!(route.kind, SchemaKind::Single);
        assert_eq!(route.schema, SchemaId::TaxRate);
    }
}

// === Error Handling ===

mod error_handling {
    use super::*;

    #[test]
    fn short_path_is_malformed() {
        let resolver = Resolver::new();

        let err = resolver.resolve("/wp-json/wc").unwrap_err();
        assert!(matches!(err, ResolveError::MalformedPath { .. }));

        let err = resolver.resolve("orders/727").unwrap_err();
        assert!(matches!(err, ResolveError::MalformedPath { .. }));
    }

    #[test]
    fn unknown_endpoint_is_unresolved() {
        let resolver = Resolver::new();

        let err = resolver.resolve("/wp-json/wc/v3/unknown").unwrap_err();
        assert!(matches!(err, ResolveError::UnresolvedEndpoint { .. }));

        // Known prefix, one segment too deep.
        let err = resolver
            .resolve("/wp-json/wc/v3/orders/1/notes/2/extra")
            .unwrap_err();
        assert!(matches!(err, ResolveError::UnresolvedEndpoint { .. }));
    }

    #[test]
    fn namespace_prefix_only_is_unresolved() {
        let resolver = Resolver::new();
        let err = resolver.resolve("/wp-json/wc/v3").unwrap_err();
        assert!(matches!(err, ResolveError::UnresolvedEndpoint { .. }));
    }

    #[test]
    fn error_message_carries_the_input() {
        let resolver = Resolver::new();
        let err = resolver.resolve("/wp-json/wc/v3/bogus").unwrap_err();
        assert!(err.to_string().contains("/wp-json/wc/v3/bogus"));
    }
}

// === Whole-table Coverage ===

mod table_coverage {
    use super::*;

    /// Every template in the table must resolve back to its own schema when
    /// its parameters are substituted with plausible identifiers.
    #[test]
    fn every_template_resolves_to_its_own_schema() {
        let resolver = Resolver::new();

        for entry in resolver.table().entries() {
            let path: String = entry
                .template()
                .trim_start_matches('/')
                .split('/')
                .map(|segment| {
                    if segment.starts_with('{') {
                        "17"
                    } else {
                        segment
                    }
                })
                .collect::<Vec<_>>()
                .join("/");
            let full = format!("/wp-json/wc/v3/{path}");

            let route = resolver
                .resolve(&full)
                .unwrap_or_else(|e| panic!("{} failed to resolve: {e}", entry.template()));

            assert_eq!(route.kind, entry.kind(), "kind mismatch for {}", entry.template());
            // Substituted numeric params never collide with a more-literal
            // template, so the schema must be the entry's own.
            assert_eq!(
                route.schema,
                entry.schema(),
                "schema mismatch for {}",
                entry.template()
            );
        }
    }

    #[test]
    fn table_has_no_duplicate_templates() {
        let resolver = Resolver::new();
        let mut templates: Vec<&str> = resolver
            .table()
            .entries()
            .map(|entry| entry.template())
            .collect();
        let total = templates.len();
        templates.sort_unstable();
        templates.dedup();
        assert_eq!(templates.len(), total);
    }
}
