//! 新帳號的預設目錄

use stock_core::{Category, Product};

/// 新帳號初始化時取得的示範商品
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new("SF-001", "無線降噪耳機 (Pro版)", "Amazon US", Category::Electronics)
            .with_image("https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=150&h=150&fit=crop")
            .with_stock(120, 50, 0)
            .with_sales_last_7_days(85),
        Product::new("SF-002", "人體工學辦公椅", "Shopify 獨立站", Category::Home)
            .with_image("https://images.unsplash.com/photo-1592078615290-033ee584e267?w=150&h=150&fit=crop")
            .with_stock(45, 0, 0)
            .with_sales_last_7_days(20),
        Product::new("SF-003", "純棉圓領T恤", "Amazon US", Category::Apparel)
            .with_image("https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=150&h=150&fit=crop")
            .with_stock(1500, 200, 500)
            .with_sales_last_7_days(140),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_shape() {
        let products = seed_products();

        assert_eq!(products.len(), 3);
        assert_eq!(products[0].sku, "SF-001");
        assert_eq!(products[2].total_pipeline_stock(), 2200);

        // 每次生成的 ID 都是新的
        let again = seed_products();
        assert_ne!(products[0].id, again[0].id);
    }
}
