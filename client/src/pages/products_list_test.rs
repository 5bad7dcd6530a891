use super::*;

#[test]
fn found_label_counts_products() {
    assert_eq!(found_label(0), "Products found: 0");
    assert_eq!(found_label(9), "Products found: 9");
}
