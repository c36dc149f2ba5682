mod common;

use common::{fast_config, FakeGroup, FakePage, FakeRow};
use roadmap_scrape::services::CurriculumWriter;
use roadmap_scrape::{AppError, CanonicalOrder, CurriculumAggregator};
use tokio_test::{assert_err, assert_ok};

/// 页面上的顺序故意和规范顺序不同
fn shuffled_roadmap() -> Vec<FakeGroup> {
    vec![
        FakeGroup::new(
            "Sliding Window",
            vec![
                FakeRow::problem("Best Time to Buy And Sell Stock", "Easy"),
                FakeRow::problem("Longest Substring Without Repeating Characters", "Medium"),
            ],
        ),
        FakeGroup::new("Stack", vec![FakeRow::problem("Valid Parentheses", "Easy")]),
        FakeGroup::new(
            "Arrays & Hashing",
            vec![
                FakeRow::problem("Contains Duplicate", "Easy"),
                FakeRow::problem("Valid Anagram", "Easy"),
                FakeRow::problem("Two Sum", "Easy"),
            ],
        ),
        FakeGroup::new("2-D DP", vec![FakeRow::problem("Unique Paths", "Medium")]),
        FakeGroup::new(
            "Heap /\n  Priority Queue",
            vec![FakeRow::problem("Kth Largest Element In a Stream", "Easy")],
        ),
    ]
}

#[tokio::test]
async fn test_groups_follow_canonical_order() {
    let page = FakePage::new(vec![
        FakeGroup::new("Stack", vec![FakeRow::problem("Valid Parentheses", "Easy")]),
        FakeGroup::new("Arrays & Hashing", vec![FakeRow::problem("Two Sum", "Easy")]),
    ]);
    let order = CanonicalOrder::new(["Arrays & Hashing", "Stack"]).unwrap();
    let aggregator = CurriculumAggregator::new(&fast_config(), order);

    let curriculum = assert_ok!(aggregator.run(&page).await);

    let names: Vec<_> = curriculum.groups().iter().map(|g| g.group_name.as_str()).collect();
    assert_eq!(names, ["Arrays & Hashing", "Stack"]);
    // 页面上仍按发现顺序处理
    assert_eq!(
        page.clicks(),
        ["open:Stack", "close:ESC", "open:Arrays & Hashing", "close:ESC"]
    );
}

#[tokio::test]
async fn test_full_walk_with_default_order() {
    let page = FakePage::new(shuffled_roadmap());
    let aggregator = CurriculumAggregator::new(&fast_config(), CanonicalOrder::default());

    let curriculum = aggregator.run(&page).await.unwrap();

    let ranks: Vec<usize> = curriculum
        .groups()
        .iter()
        .map(|g| aggregator.order().rank_of(&g.group_name).unwrap())
        .collect();
    assert!(ranks.windows(2).all(|w| w[0] < w[1]), "排名应严格递增: {:?}", ranks);
    assert_eq!(curriculum.groups()[0].group_name, "Arrays & Hashing");
    assert_eq!(curriculum.groups()[3].group_name, "Heap / Priority Queue");
    assert_eq!(curriculum.total_questions(), 8);

    // 分组内保持表格行顺序
    let arrays: Vec<_> = curriculum.groups()[0]
        .questions
        .iter()
        .map(|q| q.name.as_str())
        .collect();
    assert_eq!(arrays, ["Contains Duplicate", "Valid Anagram", "Two Sum"]);

    for group in curriculum.groups() {
        for question in &group.questions {
            assert!(!question.name.is_empty());
            assert!(!question.primary_link.is_empty());
            let difficulty = question.difficulty.as_str();
            assert!(!difficulty.is_empty());
            assert_eq!(difficulty, difficulty.to_lowercase());
        }
    }

    // 严格串行：每次展开之后都紧跟一次关闭
    assert_eq!(page.overlapping_opens(), 0);
    let clicks = page.clicks();
    assert_eq!(clicks.len(), 10);
    for pair in clicks.chunks(2) {
        assert!(pair[0].starts_with("open:"));
        assert_eq!(pair[1], "close:ESC");
    }
    assert_eq!(page.expanded_group(), None);
}

#[tokio::test]
async fn test_unknown_group_fails_run() {
    let mut groups = shuffled_roadmap();
    groups.push(FakeGroup::new("Sorting", vec![FakeRow::problem("Sort Colors", "Medium")]));
    let page = FakePage::new(groups);
    let aggregator = CurriculumAggregator::new(&fast_config(), CanonicalOrder::default());

    let err = assert_err!(aggregator.run(&page).await);

    match err {
        AppError::UnknownGroup { group } => assert_eq!(group, "Sorting"),
        other => panic!("应该返回 UnknownGroup, 实际: {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_close_control_aborts_run() {
    let page = FakePage::new(shuffled_roadmap()).with_close_labels(&["Close"]);
    let aggregator = CurriculumAggregator::new(&fast_config(), CanonicalOrder::default());

    let err = aggregator.run(&page).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::CloseControlNotFound { ref group, .. } if group == "Sliding Window"
    ));
    // 第一个分组关闭失败后不会再打开其他分组
    assert_eq!(page.clicks(), ["open:Sliding Window"]);
}

#[tokio::test]
async fn test_row_failure_aborts_remaining_groups() {
    let mut groups = shuffled_roadmap();
    groups[1] = FakeGroup::new(
        "Stack",
        vec![
            FakeRow::problem("Valid Parentheses", "Easy"),
            FakeRow::new("Min Stack", "Medium", &[]),
        ],
    );
    let page = FakePage::new(groups);
    let aggregator = CurriculumAggregator::new(&fast_config(), CanonicalOrder::default());

    let err = aggregator.run(&page).await.unwrap_err();

    match err {
        AppError::MissingField { group, row, field } => {
            assert_eq!(group, "Stack");
            assert_eq!(row, 2);
            assert_eq!(field, "primary_link");
        }
        other => panic!("应该返回 MissingField, 实际: {:?}", other),
    }
    assert_eq!(
        page.clicks(),
        ["open:Sliding Window", "close:ESC", "open:Stack"]
    );
}

#[tokio::test]
async fn test_render_timeout_aborts_run() {
    let mut groups = shuffled_roadmap();
    groups[0].rows[1] = FakeRow::problem("Permutation In String", "Medium").never_visible();
    let page = FakePage::new(groups);
    let aggregator = CurriculumAggregator::new(&fast_config(), CanonicalOrder::default());

    let err = aggregator.run(&page).await.unwrap_err();
    assert!(matches!(err, AppError::RenderTimeout { row: 2, .. }));
}

#[tokio::test]
async fn test_empty_page_gives_empty_curriculum() {
    let page = FakePage::new(Vec::new());
    let aggregator = CurriculumAggregator::new(&fast_config(), CanonicalOrder::default());

    let curriculum = aggregator.run(&page).await.unwrap();
    assert!(curriculum.is_empty());
    assert_eq!(CurriculumWriter::render(&curriculum).unwrap(), "[]");
}

#[tokio::test]
async fn test_identical_pages_give_identical_output() {
    let aggregator = CurriculumAggregator::new(&fast_config(), CanonicalOrder::default());

    let first = aggregator.run(&FakePage::new(shuffled_roadmap())).await.unwrap();
    let second = aggregator.run(&FakePage::new(shuffled_roadmap())).await.unwrap();

    let first_json = CurriculumWriter::render(&first).unwrap();
    let second_json = CurriculumWriter::render(&second).unwrap();
    assert_eq!(first_json, second_json);
    assert!(first_json.contains("\"lc_link\": \"https://leetcode.com/problems/two-sum/\""));
    assert!(first_json.contains("\"free_link\": \"https://neetcode.io/problems/two-sum\""));
}

#[tokio::test]
async fn test_daily_question_lookup() {
    let page = FakePage::new(shuffled_roadmap());
    let aggregator = CurriculumAggregator::new(&fast_config(), CanonicalOrder::default());
    let curriculum = aggregator.run(&page).await.unwrap();

    // Arrays & Hashing(3) → Stack(1) → Sliding Window(2) → ...
    let (group, question) = curriculum.question_at(4).unwrap();
    assert_eq!(group.group_name, "Sliding Window");
    assert_eq!(question.name, "Best Time to Buy And Sell Stock");
}
