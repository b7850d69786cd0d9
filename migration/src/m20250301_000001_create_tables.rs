use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建客户表
        manager
            .create_table(
                Table::create()
                    .table(Clients::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Clients::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Clients::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Clients::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(Clients::Role)
                            .string()
                            .not_null()
                            .default("User"),
                    )
                    .col(ColumnDef::new(Clients::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Clients::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建专业表
        manager
            .create_table(
                Table::create()
                    .table(Majors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Majors::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Majors::ClientId).big_integer().not_null())
                    .col(ColumnDef::new(Majors::Name).string().not_null())
                    .col(ColumnDef::new(Majors::UniversityName).string().not_null())
                    .col(ColumnDef::new(Majors::Address).string().not_null())
                    .col(ColumnDef::new(Majors::Duration).string().not_null())
                    .col(ColumnDef::new(Majors::Language).string().not_null())
                    .col(ColumnDef::new(Majors::GradingSystem).string().not_null())
                    .col(ColumnDef::new(Majors::Notes).text().not_null())
                    .col(
                        ColumnDef::new(Majors::Status)
                            .string()
                            .not_null()
                            .default("Liked"),
                    )
                    .col(ColumnDef::new(Majors::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Majors::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Majors::Table, Majors::ClientId)
                            .to(Clients::Table, Clients::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建考试表
        manager
            .create_table(
                Table::create()
                    .table(Exams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Exams::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Exams::ClientId).big_integer().not_null())
                    .col(ColumnDef::new(Exams::Date).big_integer().not_null())
                    .col(ColumnDef::new(Exams::Address).string().not_null())
                    .col(ColumnDef::new(Exams::TestName).string().not_null())
                    .col(ColumnDef::new(Exams::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Exams::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Exams::Table, Exams::ClientId)
                            .to(Clients::Table, Clients::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建申请表
        manager
            .create_table(
                Table::create()
                    .table(Applications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Applications::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Applications::MajorId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Applications::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Applications::Deadline).big_integer().not_null())
                    .col(ColumnDef::new(Applications::Stage).string().not_null())
                    .col(ColumnDef::new(Applications::Notes).text().not_null())
                    .col(
                        ColumnDef::new(Applications::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Applications::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Applications::Table, Applications::MajorId)
                            .to(Majors::Table, Majors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Applications::Table, Applications::StudentId)
                            .to(Clients::Table, Clients::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 专业-考试关联表
        manager
            .create_table(
                Table::create()
                    .table(MajorExams::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(MajorExams::MajorId).big_integer().not_null())
                    .col(ColumnDef::new(MajorExams::ExamId).big_integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(MajorExams::MajorId)
                            .col(MajorExams::ExamId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MajorExams::Table, MajorExams::MajorId)
                            .to(Majors::Table, Majors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MajorExams::Table, MajorExams::ExamId)
                            .to(Exams::Table, Exams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 申请-考试关联表
        manager
            .create_table(
                Table::create()
                    .table(ApplicationExams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ApplicationExams::ApplicationId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ApplicationExams::ExamId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(ApplicationExams::ApplicationId)
                            .col(ApplicationExams::ExamId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ApplicationExams::Table, ApplicationExams::ApplicationId)
                            .to(Applications::Table, Applications::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ApplicationExams::Table, ApplicationExams::ExamId)
                            .to(Exams::Table, Exams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_majors_client_id")
                    .table(Majors::Table)
                    .col(Majors::ClientId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_exams_client_id")
                    .table(Exams::Table)
                    .col(Exams::ClientId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_applications_student_id")
                    .table(Applications::Table)
                    .col(Applications::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_applications_major_id")
                    .table(Applications::Table)
                    .col(Applications::MajorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_major_exams_exam_id")
                    .table(MajorExams::Table)
                    .col(MajorExams::ExamId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_application_exams_exam_id")
                    .table(ApplicationExams::Table)
                    .col(ApplicationExams::ExamId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(ApplicationExams::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MajorExams::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Applications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Exams::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Majors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Clients::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Clients {
    Table,
    Id,
    Username,
    PasswordHash,
    Role,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Majors {
    Table,
    Id,
    ClientId,
    Name,
    UniversityName,
    Address,
    Duration,
    Language,
    GradingSystem,
    Notes,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Exams {
    Table,
    Id,
    ClientId,
    Date,
    Address,
    TestName,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Applications {
    Table,
    Id,
    MajorId,
    StudentId,
    Deadline,
    Stage,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum MajorExams {
    Table,
    MajorId,
    ExamId,
}

#[derive(DeriveIden)]
enum ApplicationExams {
    Table,
    ApplicationId,
    ExamId,
}
