use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // job_id has no foreign key: favoriting never checks that the posting exists.
        manager
            .create_table(
                Table::create()
                    .table(FavoriteJobs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(FavoriteJobs::UserId).uuid().not_null())
                    .col(ColumnDef::new(FavoriteJobs::JobId).uuid().not_null())
                    .col(
                        ColumnDef::new(FavoriteJobs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_favorite_jobs")
                            .col(FavoriteJobs::UserId)
                            .col(FavoriteJobs::JobId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_jobs_user_id")
                            .from(FavoriteJobs::Table, FavoriteJobs::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_favorite_jobs_job_id
                ON favorite_jobs (job_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoriteJobs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FavoriteJobs {
    Table,
    UserId,
    JobId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
