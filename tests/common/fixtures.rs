//! Test fixtures - tag lists in the JSON shape the data layer hands over.

use tagtree::{TagRecord, TaxonomyDimension};

/// The corporate-admin subtree of JOB_CATEGORY plus one INDUSTRY root,
/// listed children-first to exercise unordered input.
pub const JOB_CATEGORY_TAGS: &str = r#"[
  {"id": "recruitment-newgrad-mid", "name": "新卒・中途採用", "dimension": "JOB_CATEGORY", "level": 3, "parentId": "hr-recruitment", "sortOrder": 1, "articleCount": 12},
  {"id": "hr-development-training", "name": "人材開発・研修", "dimension": "JOB_CATEGORY", "level": 3, "parentId": "hr-recruitment", "sortOrder": 2},
  {"id": "legal-ip", "name": "法務・知財", "dimension": "JOB_CATEGORY", "level": 2, "parentId": "corporate-admin", "sortOrder": 3},
  {"id": "finance-accounting", "name": "経理・財務", "dimension": "JOB_CATEGORY", "level": 2, "parentId": "corporate-admin", "sortOrder": 2},
  {"id": "hr-recruitment", "name": "人事・採用", "dimension": "JOB_CATEGORY", "level": 2, "parentId": "corporate-admin", "sortOrder": 1},
  {"id": "corporate-admin", "name": "管理部門", "dimension": "JOB_CATEGORY", "level": 1, "parentId": null, "sortOrder": 1, "description": "バックオフィス全般"},
  {"id": "it-software", "name": "IT・ソフトウェア", "dimension": "INDUSTRY", "level": 1, "parentId": null, "sortOrder": 1}
]"#;

/// A record whose parent does not exist
pub const ORPHAN_TAGS: &str = r#"[
  {"id": "executive", "name": "経営層", "dimension": "POSITION", "level": 1, "sortOrder": 1},
  {"id": "lost", "name": "迷子", "dimension": "POSITION", "level": 2, "parentId": "ghost", "sortOrder": 2}
]"#;

/// Two records that are each other's parent
pub const CYCLE_TAGS: &str = r#"[
  {"id": "a", "name": "A", "dimension": "SITUATION", "level": 2, "parentId": "b", "sortOrder": 1},
  {"id": "b", "name": "B", "dimension": "SITUATION", "level": 2, "parentId": "a", "sortOrder": 1}
]"#;

/// The same data as `JOB_CATEGORY_TAGS`, as records
pub fn job_category_records() -> Vec<TagRecord> {
    const JOB: TaxonomyDimension = TaxonomyDimension::JobCategory;
    vec![
        TagRecord::child(
            "recruitment-newgrad-mid",
            "新卒・中途採用",
            JOB,
            "hr-recruitment",
            2,
            1,
        )
        .with_article_count(12),
        TagRecord::child(
            "hr-development-training",
            "人材開発・研修",
            JOB,
            "hr-recruitment",
            2,
            2,
        ),
        TagRecord::child("legal-ip", "法務・知財", JOB, "corporate-admin", 1, 3),
        TagRecord::child("finance-accounting", "経理・財務", JOB, "corporate-admin", 1, 2),
        TagRecord::child("hr-recruitment", "人事・採用", JOB, "corporate-admin", 1, 1),
        TagRecord::root("corporate-admin", "管理部門", JOB, 1).with_description("バックオフィス全般"),
        TagRecord::root("it-software", "IT・ソフトウェア", TaxonomyDimension::Industry, 1),
    ]
}
