use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};

use crate::models::{food_analysis, nutrition_plan, progress_entry, user_profile, workout_plan};

/// Connect to the database and make sure all tables exist.
pub async fn establish_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;
    create_tables(&db).await?;
    Ok(db)
}

/// The app owns a single local database file, so the schema is derived
/// straight from the entity definitions instead of separate migrations.
async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut statements = vec![
        schema.create_table_from_entity(user_profile::Entity),
        schema.create_table_from_entity(nutrition_plan::Entity),
        schema.create_table_from_entity(workout_plan::Entity),
        schema.create_table_from_entity(progress_entry::Entity),
        schema.create_table_from_entity(food_analysis::Entity),
    ];

    for statement in &mut statements {
        db.execute(backend.build(statement.if_not_exists())).await?;
    }

    Ok(())
}
