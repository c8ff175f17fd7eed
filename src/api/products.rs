//! `/products/` handle (read-only catalog)

use super::client::{Auth, Request};
use super::page::MaybeEnveloped;
use super::{ApiClient, ApiError, Page};
use crate::domain::{CategoryRef, Product, ProductSort};

/// Query for the product list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Category id or name
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: Option<ProductSort>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ProductFilter {
    /// Same filter applied to an already-fetched product
    pub fn matches(&self, product: &Product) -> bool {
        // a bare category id cannot be compared with a category name
        let category_ok = self.category.as_deref().map_or(true, |wanted| {
            match &product.category {
                CategoryRef::Id(_) if wanted.parse::<u64>().is_err() => true,
                category => category.matches(wanted),
            }
        });

        let search_ok = self
            .search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .map_or(true, |needle| {
                product.name.to_lowercase().contains(&needle)
                    || product
                        .description
                        .as_deref()
                        .map_or(false, |d| d.to_lowercase().contains(&needle))
            });

        category_ok && search_ok
    }

    /// Keep the matching rows of a fetched page, in the requested order
    ///
    /// Backends that ignore `sort` or `search` still yield the listing the
    /// user asked for.
    pub fn refine(&self, mut products: Vec<Product>) -> Vec<Product> {
        products.retain(|product| self.matches(product));
        if let Some(sort) = self.sort {
            sort_products(&mut products, sort);
        }
        products
    }

    fn apply(&self, request: Request) -> Request {
        request
            .query_opt("category", self.category.as_deref())
            .query_opt("search", self.search.as_deref().filter(|s| !s.trim().is_empty()))
            .query_opt("sort", self.sort.map(|s| s.as_str()))
            .query_opt("page", self.page)
            .query_opt("page_size", self.page_size)
    }
}

/// Client-side ordering matching the server's `sort` parameter
pub fn sort_products(products: &mut [Product], sort: ProductSort) {
    match sort {
        ProductSort::PriceAsc => products.sort_by(|a, b| a.price.cmp(&b.price)),
        ProductSort::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
        ProductSort::Latest => products.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }
}

pub struct ProductsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ProductsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// One page of the catalog, refined by [`ProductFilter::refine`]
    pub async fn list(&self, filter: &ProductFilter) -> Result<Page<Product>, ApiError> {
        let request = filter.apply(Request::get("/products/"));
        let mut page: Page<Product> = self.client.call(request, Auth::Optional).await?;
        page.results = filter.refine(std::mem::take(&mut page.results));
        Ok(page)
    }

    pub async fn get(&self, id: u64) -> Result<Product, ApiError> {
        let request = Request::get(format!("/products/{}/", id));
        let product: MaybeEnveloped<Product> = self.client.call(request, Auth::Optional).await?;
        Ok(product.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, name: &str, price: &str, category: u64, created: &str) -> Product {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "price": price,
            "category": category,
            "status": "available",
            "description": "센서와 모터로 만드는 키트",
            "created_at": created
        }))
        .unwrap()
    }

    #[test]
    fn test_filter_matches() {
        let kit = product(1, "스마트팜 키트", "57200.00", 3, "2025-05-01T10:00:00+09:00");

        let filter = ProductFilter {
            category: Some("3".into()),
            search: Some("스마트".into()),
            ..Default::default()
        };
        assert!(filter.matches(&kit));

        let filter = ProductFilter {
            search: Some("모터".into()),
            ..Default::default()
        };
        assert!(filter.matches(&kit));

        let filter = ProductFilter {
            category: Some("4".into()),
            ..Default::default()
        };
        assert!(!filter.matches(&kit));
    }

    #[test]
    fn test_sort_products() {
        let mut products = vec![
            product(1, "A", "30000.00", 1, "2025-01-01T00:00:00+09:00"),
            product(2, "B", "9900.00", 1, "2025-03-01T00:00:00+09:00"),
            product(3, "C", "57200.00", 1, "2025-02-01T00:00:00+09:00"),
        ];

        sort_products(&mut products, ProductSort::PriceAsc);
        assert_eq!(products.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 1, 3]);

        sort_products(&mut products, ProductSort::Latest);
        assert_eq!(products.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 3, 1]);
    }

    #[test]
    fn test_refine_filters_then_sorts() {
        let products = vec![
            product(1, "스마트팜 키트", "30000.00", 3, "2025-01-01T00:00:00+09:00"),
            product(2, "드론 키트", "9900.00", 4, "2025-03-01T00:00:00+09:00"),
            product(3, "스마트 로봇", "12000.00", 3, "2025-02-01T00:00:00+09:00"),
        ];
        let filter = ProductFilter {
            category: Some("3".into()),
            sort: Some(ProductSort::PriceAsc),
            ..Default::default()
        };

        let refined = filter.refine(products.clone());
        assert_eq!(refined.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3, 1]);

        let unfiltered = ProductFilter::default().refine(products);
        assert_eq!(unfiltered.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
