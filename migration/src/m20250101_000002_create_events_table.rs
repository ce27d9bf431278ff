use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Events::EventId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Events::EventName).text().not_null())
                    // Local wall-clock time, no zone.
                    .col(ColumnDef::new(Events::EventDate).timestamp().not_null())
                    .col(ColumnDef::new(Events::Duration).integer())
                    .col(ColumnDef::new(Events::EventDescription).text())
                    .col(ColumnDef::new(Events::Poster).text().not_null())
                    .col(ColumnDef::new(Events::RegLink).text())
                    .col(ColumnDef::new(Events::WhatsappLink).text())
                    .col(ColumnDef::new(Events::Venue).text())
                    .col(
                        ColumnDef::new(Events::Visibility)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Events::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Events::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Listings are newest first.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_events_event_date
                ON events (event_date DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_events_event_name
                ON events (event_name);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_events_updated_at
                BEFORE UPDATE ON events
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_events_updated_at ON events;
                DROP INDEX IF EXISTS idx_events_event_date;
                DROP INDEX IF EXISTS idx_events_event_name;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Events {
    Table,
    EventId,
    EventName,
    EventDate,
    Duration,
    EventDescription,
    Poster,
    RegLink,
    WhatsappLink,
    Venue,
    Visibility,
    CreatedAt,
    UpdatedAt,
}
