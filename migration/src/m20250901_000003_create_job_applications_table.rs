use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One row per (job, applicant). Both the posting's applicant list and
        // the user's application history are read from this table.
        manager
            .create_table(
                Table::create()
                    .table(JobApplications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JobApplications::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(JobApplications::JobId).uuid().not_null())
                    .col(ColumnDef::new(JobApplications::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(JobApplications::Status)
                            .string_len(16)
                            .not_null()
                            .default("applied"),
                    )
                    .col(ColumnDef::new(JobApplications::Resume).text())
                    .col(ColumnDef::new(JobApplications::CoverLetter).text())
                    .col(
                        ColumnDef::new(JobApplications::AppliedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(JobApplications::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_applications_job_id")
                            .from(JobApplications::Table, JobApplications::JobId)
                            .to(Jobs::Table, Jobs::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_applications_user_id")
                            .from(JobApplications::Table, JobApplications::UserId)
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
                CREATE UNIQUE INDEX IF NOT EXISTS idx_job_applications_job_user
                ON job_applications (job_id, user_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_job_applications_user_applied_at
                ON job_applications (user_id, applied_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE job_applications
                ADD CONSTRAINT chk_job_applications_status
                CHECK (status IN ('applied', 'viewed', 'interview', 'rejected', 'accepted'));
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_job_applications_updated_at
                BEFORE UPDATE ON job_applications
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
                DROP TRIGGER IF EXISTS update_job_applications_updated_at ON job_applications;
                DROP INDEX IF EXISTS idx_job_applications_job_user;
                DROP INDEX IF EXISTS idx_job_applications_user_applied_at;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(JobApplications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum JobApplications {
    Table,
    Id,
    JobId,
    UserId,
    Status,
    Resume,
    CoverLetter,
    AppliedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Jobs {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
