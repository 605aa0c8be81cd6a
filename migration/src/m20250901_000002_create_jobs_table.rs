use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create jobs table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Jobs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Jobs::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Jobs::JobTitle).string_len(100).not_null())
                    .col(ColumnDef::new(Jobs::CompanyName).string_len(150).not_null())
                    .col(ColumnDef::new(Jobs::CompanyLogo).text())
                    .col(ColumnDef::new(Jobs::JobDescription).text().not_null())
                    .col(ColumnDef::new(Jobs::JobExcerpt).string_len(200))
                    .col(
                        ColumnDef::new(Jobs::JobTags)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Jobs::JobType)
                            .string_len(16)
                            .not_null()
                            .default("full-time"),
                    )
                    .col(ColumnDef::new(Jobs::JobLevel).string_len(16).not_null())
                    .col(ColumnDef::new(Jobs::JobGeo).string_len(150).not_null())
                    .col(
                        ColumnDef::new(Jobs::IsRemote)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Jobs::SalaryMin).big_integer())
                    .col(ColumnDef::new(Jobs::SalaryMax).big_integer())
                    .col(
                        ColumnDef::new(Jobs::SalaryCurrency)
                            .string_len(8)
                            .not_null()
                            .default("USD"),
                    )
                    .col(
                        ColumnDef::new(Jobs::Requirements)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Jobs::Benefits)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Jobs::Url).text().not_null())
                    .col(ColumnDef::new(Jobs::ApplicationUrl).text())
                    .col(ColumnDef::new(Jobs::JobIndustry).string_len(100))
                    .col(ColumnDef::new(Jobs::CompanySize).string_len(50))
                    .col(
                        ColumnDef::new(Jobs::Source)
                            .string_len(16)
                            .not_null()
                            .default("internal"),
                    )
                    .col(
                        ColumnDef::new(Jobs::IsExternal)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Jobs::ExternalId).string_len(100))
                    .col(ColumnDef::new(Jobs::PostedBy).uuid())
                    .col(
                        ColumnDef::new(Jobs::Views)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Jobs::Clicks)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Jobs::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("now() + interval '30 days'")),
                    )
                    .col(
                        ColumnDef::new(Jobs::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Jobs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Jobs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_jobs_posted_by")
                            .from(Jobs::Table, Jobs::PostedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Constraints
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE jobs
                ADD CONSTRAINT chk_jobs_job_type
                CHECK (job_type IN ('full-time', 'part-time', 'contract', 'freelance', 'internship')),
                ADD CONSTRAINT chk_jobs_job_level
                CHECK (job_level IN ('entry', 'junior', 'mid', 'senior', 'lead', 'executive')),
                ADD CONSTRAINT chk_jobs_source
                CHECK (source IN ('internal', 'jobicy', 'remotive', 'manual')),
                ADD CONSTRAINT chk_jobs_counters
                CHECK (views >= 0 AND clicks >= 0);
                "#,
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Public listing: live postings, newest first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_jobs_live_created_at
                ON jobs (created_at DESC)
                WHERE is_active = true;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_jobs_posted_by
                ON jobs (posted_by);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_jobs_job_tags
                ON jobs USING GIN (job_tags);
                "#,
            )
            .await?;

        // One imported row per third-party posting
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_jobs_source_external_id
                ON jobs (source, external_id)
                WHERE external_id IS NOT NULL;
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_jobs_updated_at
                BEFORE UPDATE ON jobs
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
                DROP TRIGGER IF EXISTS update_jobs_updated_at ON jobs;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_jobs_live_created_at;
                DROP INDEX IF EXISTS idx_jobs_posted_by;
                DROP INDEX IF EXISTS idx_jobs_job_tags;
                DROP INDEX IF EXISTS idx_jobs_source_external_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Jobs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Jobs {
    Table,
    Id,
    JobTitle,
    CompanyName,
    CompanyLogo,
    JobDescription,
    JobExcerpt,
    JobTags,
    JobType,
    JobLevel,
    JobGeo,
    IsRemote,
    SalaryMin,
    SalaryMax,
    SalaryCurrency,
    Requirements,
    Benefits,
    Url,
    ApplicationUrl,
    JobIndustry,
    CompanySize,
    Source,
    IsExternal,
    ExternalId,
    PostedBy,
    Views,
    Clicks,
    ExpiresAt,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
