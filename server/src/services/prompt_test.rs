use super::*;

#[test]
fn error_messages_are_descriptive() {
    assert_eq!(PromptError::NotFound.to_string(), "prompt template not found");
}

// Live round-trip against a real database. Run with:
//   DATABASE_URL=... cargo test --features live-db-tests
#[cfg(feature = "live-db-tests")]
mod live {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    async fn live_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for live tests");
        PgPoolOptions::new().max_connections(2).connect(&url).await.expect("connect")
    }

    #[tokio::test]
    async fn create_update_and_toggle_round_trip() {
        let pool = live_pool().await;

        let created = create_prompt(&pool, "live-test", "You are helpful.").await.unwrap();
        assert_eq!(created.version, 1);
        assert!(created.is_active);

        let updated = update_prompt(&pool, created.id, "live-test", "You are concise.").await.unwrap();
        assert_eq!(updated.version, 2);
        assert_eq!(updated.content, "You are concise.");

        let toggled = set_prompt_active(&pool, created.id, false).await.unwrap();
        assert!(!toggled.is_active);
        assert_eq!(toggled.version, 2);

        sqlx::query("DELETE FROM prompt_templates WHERE id = $1")
            .bind(created.id)
            .execute(&pool)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_not_found() {
        let pool = live_pool().await;
        let result = update_prompt(&pool, Uuid::new_v4(), "x", "y").await;
        assert!(matches!(result, Err(PromptError::NotFound)));
    }
}
