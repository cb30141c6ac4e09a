//! Menu item repository against an embedded database

mod common;

use pos_server::db::models::CategoryCreate;
use pos_server::db::repository::menu_item::{MenuItemPatch, NewMenuItem};
use pos_server::db::repository::{CategoryRepository, MenuItemRepository};
use surrealdb::RecordId;

async fn category(repo: &CategoryRepository, name: &str) -> RecordId {
    repo.create(CategoryCreate {
        name: name.to_string(),
        bg_color: None,
        icon: None,
    })
    .await
    .expect("create category")
    .id
    .expect("category id")
}

#[tokio::test]
async fn test_update_fields_and_category_together() {
    let (_tmp, state) = common::test_state().await;
    let categories = CategoryRepository::new(state.db.clone());
    let items = MenuItemRepository::new(state.db.clone());
    let starters = category(&categories, "Starters").await;
    let mains = category(&categories, "Mains").await;

    let item = items
        .create(NewMenuItem {
            name: "Samosa".into(),
            price: 60.0,
            category: starters.clone(),
            description: None,
            is_available: true,
        })
        .await
        .unwrap();
    let item_id = item.id.expect("item id");

    let updated = items
        .update(
            &item_id,
            MenuItemPatch {
                name: Some("Samosa Chaat".into()),
                price: Some(90.0),
                category: Some(mains.clone()),
                ..MenuItemPatch::default()
            },
        )
        .await
        .unwrap()
        .expect("item exists");
    assert_eq!(updated.name, "Samosa Chaat");
    assert_eq!(updated.price, 90.0);
    assert_eq!(updated.category, mains);
    assert!(updated.is_available);

    // category 仍是 record link, 可以按分类查询并展开
    let in_mains = items.find_by_category(&mains).await.unwrap();
    assert_eq!(in_mains.len(), 1);
    assert_eq!(
        in_mains[0].category.as_ref().map(|c| c.name.as_str()),
        Some("Mains")
    );
    assert!(items.find_by_category(&starters).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_missing_item_writes_nothing() {
    let (_tmp, state) = common::test_state().await;
    let categories = CategoryRepository::new(state.db.clone());
    let items = MenuItemRepository::new(state.db.clone());
    let drinks = category(&categories, "Drinks").await;
    let missing = RecordId::from_table_key("menu_item", "missing");

    let updated = items
        .update(
            &missing,
            MenuItemPatch {
                name: Some("Lassi".into()),
                category: Some(drinks.clone()),
                ..MenuItemPatch::default()
            },
        )
        .await
        .unwrap();
    assert!(updated.is_none());
    assert!(items.find_by_id(&missing).await.unwrap().is_none());
    assert!(items.find_all().await.unwrap().is_empty());
}
