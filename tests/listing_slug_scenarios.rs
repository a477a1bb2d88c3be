// tests/listing_slug_scenarios.rs
use easyrent::application::{
    commands::listings::{DeleteListingCommand, UpdateListingCommand},
    error::ApplicationError,
};

use easyrent::domain::slug::Slug;

mod support;
use support::{ListingBuilder, TestContext, owner, retitle};

const TITLE: &str = "Cozy Downtown Studio";

#[tokio::test]
async fn first_listing_gets_base_slug() {
    let ctx = TestContext::new().await;
    let created = ctx
        .services
        .listing_commands
        .create_listing(&owner(), ListingBuilder::new(TITLE).build())
        .await
        .unwrap();
    assert_eq!(created.slug, "cozy-downtown-studio");
}

#[tokio::test]
async fn colliding_titles_get_sequential_suffixes() {
    let ctx = TestContext::new().await;
    let commands = &ctx.services.listing_commands;

    let mut slugs = Vec::new();
    for _ in 0..3 {
        let created = commands
            .create_listing(&owner(), ListingBuilder::new(TITLE).build())
            .await
            .unwrap();
        slugs.push(created.slug);
    }
    assert_eq!(
        slugs,
        [
            "cozy-downtown-studio",
            "cozy-downtown-studio-2",
            "cozy-downtown-studio-3"
        ]
    );
}

#[tokio::test]
async fn titles_normalising_to_the_same_base_collide() {
    let ctx = TestContext::new().await;
    let commands = &ctx.services.listing_commands;
    commands
        .create_listing(&owner(), ListingBuilder::new(TITLE).build())
        .await
        .unwrap();
    let second = commands
        .create_listing(&owner(), ListingBuilder::new("  cozy downtown STUDIO!! ").build())
        .await
        .unwrap();
    assert_eq!(second.slug, "cozy-downtown-studio-2");
}

#[tokio::test]
async fn symbol_only_title_falls_back_to_flat() {
    let ctx = TestContext::new().await;
    let commands = &ctx.services.listing_commands;
    let first = commands
        .create_listing(&owner(), ListingBuilder::new("!!!").build())
        .await
        .unwrap();
    let second = commands
        .create_listing(&owner(), ListingBuilder::new("???").build())
        .await
        .unwrap();
    assert_eq!(first.slug, "flat");
    assert_eq!(second.slug, "flat-2");
}

#[tokio::test]
async fn long_transliterated_title_fits_the_slug_column() {
    let ctx = TestContext::new().await;
    let commands = &ctx.services.listing_commands;
    let title = "中".repeat(255);

    let first = commands
        .create_listing(&owner(), ListingBuilder::new(&title).build())
        .await
        .unwrap();
    let second = commands
        .create_listing(&owner(), ListingBuilder::new(&title).build())
        .await
        .unwrap();

    assert!(first.slug.len() <= Slug::MAX_BASE_LEN);
    assert!(!first.slug.ends_with('-'));
    assert_eq!(second.slug, format!("{}-2", first.slug));
    // listings.slug is VARCHAR(280)
    assert!(second.slug.len() <= 280);
}

#[tokio::test]
async fn blank_title_is_rejected_before_persistence() {
    let ctx = TestContext::new().await;
    let err = ctx
        .services
        .listing_commands
        .create_listing(&owner(), ListingBuilder::new("   ").build())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(easyrent::domain::errors::DomainError::Validation(_))
    ));
    assert!(ctx.store.listings().is_empty());
}

#[tokio::test]
async fn update_without_title_change_keeps_slug() {
    let ctx = TestContext::new().await;
    let commands = &ctx.services.listing_commands;
    let created = commands
        .create_listing(&owner(), ListingBuilder::new(TITLE).build())
        .await
        .unwrap();

    let updated = commands
        .update_listing(
            &owner(),
            UpdateListingCommand {
                id: created.id,
                room: Some(3),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.room, 3);
    assert_eq!(updated.slug, "cozy-downtown-studio");
}

#[tokio::test]
async fn update_with_identical_title_does_not_recompute() {
    let ctx = TestContext::new().await;
    let commands = &ctx.services.listing_commands;
    let created = commands
        .create_listing(&owner(), ListingBuilder::new(TITLE).build())
        .await
        .unwrap();

    // Any write carrying a slug now fails, so a recompute would surface.
    ctx.store.force_slug_conflicts(u32::MAX);
    let updated = commands
        .update_listing(&owner(), retitle(created.id, TITLE))
        .await
        .unwrap();
    ctx.store.force_slug_conflicts(0);
    assert_eq!(updated.slug, "cozy-downtown-studio");
}

#[tokio::test]
async fn update_to_new_title_rederives() {
    let ctx = TestContext::new().await;
    let commands = &ctx.services.listing_commands;
    let created = commands
        .create_listing(&owner(), ListingBuilder::new(TITLE).build())
        .await
        .unwrap();

    let updated = commands
        .update_listing(&owner(), retitle(created.id, "Sunny Loft"))
        .await
        .unwrap();
    assert_eq!(updated.slug, "sunny-loft");
    assert_eq!(updated.title, "Sunny Loft");
}

#[tokio::test]
async fn update_to_colliding_title_never_overwrites_other_slug() {
    let ctx = TestContext::new().await;
    let commands = &ctx.services.listing_commands;
    let studio = commands
        .create_listing(&owner(), ListingBuilder::new(TITLE).build())
        .await
        .unwrap();
    let loft = commands
        .create_listing(&owner(), ListingBuilder::new("Sunny Loft").build())
        .await
        .unwrap();

    let renamed = commands
        .update_listing(&owner(), retitle(loft.id, TITLE))
        .await
        .unwrap();
    assert_eq!(renamed.slug, "cozy-downtown-studio-2");

    let slugs = ctx.store.listing_slugs();
    assert!(slugs.contains(&studio.slug));
    assert!(!slugs.contains(&"sunny-loft".to_string()));
}

#[tokio::test]
async fn renaming_to_own_base_keeps_suffix_free_slug() {
    let ctx = TestContext::new().await;
    let commands = &ctx.services.listing_commands;
    let created = commands
        .create_listing(&owner(), ListingBuilder::new(TITLE).build())
        .await
        .unwrap();

    // A different title with the same base must not collide with itself.
    let updated = commands
        .update_listing(&owner(), retitle(created.id, "Cozy  Downtown Studio!"))
        .await
        .unwrap();
    assert_eq!(updated.slug, "cozy-downtown-studio");
}

#[tokio::test]
async fn deleted_slug_is_reused() {
    let ctx = TestContext::new().await;
    let commands = &ctx.services.listing_commands;
    commands
        .create_listing(&owner(), ListingBuilder::new(TITLE).build())
        .await
        .unwrap();
    let second = commands
        .create_listing(&owner(), ListingBuilder::new(TITLE).build())
        .await
        .unwrap();
    assert_eq!(second.slug, "cozy-downtown-studio-2");

    commands
        .delete_listing(&owner(), DeleteListingCommand { id: second.id })
        .await
        .unwrap();

    let third = commands
        .create_listing(&owner(), ListingBuilder::new(TITLE).build())
        .await
        .unwrap();
    assert_eq!(third.slug, "cozy-downtown-studio-2");
}

#[tokio::test]
async fn concurrent_insert_is_retried_with_next_candidate() {
    let ctx = TestContext::new().await;
    let commands = &ctx.services.listing_commands;
    commands
        .create_listing(&owner(), ListingBuilder::new(TITLE).build())
        .await
        .unwrap();

    // The pre-check misses the committed row once; the unique constraint
    // rejects the write and the retry picks the next suffix.
    ctx.store.blind_slug_checks(1);
    let created = commands
        .create_listing(&owner(), ListingBuilder::new(TITLE).build())
        .await
        .unwrap();
    assert_eq!(created.slug, "cozy-downtown-studio-2");
    assert_eq!(ctx.store.listings().len(), 2);
}

#[tokio::test]
async fn persistent_conflicts_stop_after_bounded_attempts() {
    let ctx = TestContext::new().await;
    ctx.store.force_slug_conflicts(u32::MAX);

    let err = ctx
        .services
        .listing_commands
        .create_listing(&owner(), ListingBuilder::new(TITLE).build())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)), "got {err:?}");
    assert!(ctx.store.listings().is_empty());
}

#[tokio::test]
async fn conflicts_below_the_bound_still_succeed() {
    let ctx = TestContext::new().await;
    let max = easyrent::application::commands::listings::MAX_SLUG_ATTEMPTS;
    ctx.store.force_slug_conflicts(max - 1);

    let created = ctx
        .services
        .listing_commands
        .create_listing(&owner(), ListingBuilder::new(TITLE).build())
        .await
        .unwrap();
    assert_eq!(created.slug, "cozy-downtown-studio");
}
