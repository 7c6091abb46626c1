//! End-to-end planning scenarios through the public API.

use u_courseplan::models::{CourseNode, DiagnosticCode, PlanningRequest, Season, TermId};
use u_courseplan::resolver::resolve;
use u_courseplan::scheduler::{PlanKpi, TermScheduler};
use u_courseplan::validation::{validate_input, verify_plan};
use u_courseplan::{generate_plan, PlanError};

fn degree_courses() -> Vec<CourseNode> {
    vec![
        CourseNode::new("cs101", 3).with_code("CS101").with_title("Intro to Programming"),
        CourseNode::new("cs102", 3).with_code("CS102").with_prereq("cs101"),
        CourseNode::new("cs201", 4).with_code("CS201").with_prereq("cs102"),
        CourseNode::new("cs210", 3).with_code("CS210").with_prereqs(["cs102", "math102"]),
        CourseNode::new("cs301", 4).with_code("CS301").with_prereqs(["cs201", "cs210"]),
        CourseNode::new("math101", 4).with_code("MATH101"),
        CourseNode::new("math102", 4).with_code("MATH102").with_prereq("math101"),
        CourseNode::new("eng100", 3).with_code("ENG100"),
        CourseNode::new("hist100", 3).with_code("HIST100"),
    ]
}

fn request_json(json: &str) -> PlanningRequest {
    PlanningRequest::from_json(json).unwrap()
}

#[test]
fn full_degree_respects_every_invariant() {
    let courses = degree_courses();
    let request = request_json(
        r#"{"semestersRemaining":6,"maxCreditsPerSemester":10,"startSeason":"Fall","startYear":2024}"#,
    );
    assert!(validate_input(&courses, &request).is_ok());

    let generated = generate_plan(&request, &courses).unwrap();
    let plan = &generated.plan;

    assert!(verify_plan(plan.terms(), &courses, &request).is_empty());
    assert_eq!(plan.course_count(), courses.len());
    assert!(plan.semester_count() <= 6);
    for term in plan.terms() {
        assert!(term.total_credits <= 10);
        assert_ne!(term.season, Season::Summer);
    }
    assert!(generated.is_clean());

    let intro = plan.term_for_course("cs101").unwrap();
    assert_eq!(intro.courses[0].title, "Intro to Programming");
}

#[test]
fn overload_and_summer_preferences() {
    let courses = degree_courses();
    let request = request_json(
        r#"{"semestersRemaining":4,"maxCreditsPerSemester":8,"allowOverload":true,
            "prefersSummer":true,"startSeason":"Spring","startYear":2025}"#,
    );
    let generated = generate_plan(&request, &courses).unwrap();
    let plan = &generated.plan;

    assert!(verify_plan(plan.terms(), &courses, &request).is_empty());
    for term in plan.terms() {
        assert!(term.total_credits <= 10);
    }
    let seasons: Vec<Season> = plan.terms().map(|t| t.season).collect();
    assert_eq!(seasons[..2], [Season::Spring, Season::Summer]);
}

#[test]
fn taken_courses_unblock_dependents() {
    let courses = degree_courses();
    let request = PlanningRequest::new(TermId::new(Season::Spring, 2024), 3, 15)
        .with_taken("cs101")
        .with_taken("math101");
    let generated = generate_plan(&request, &courses).unwrap();
    let placed = generated.plan.placed_course_ids();

    assert!(!placed.contains(&"cs101"));
    assert!(!placed.contains(&"math101"));
    let first = &generated.plan.semesters[0].term;
    assert!(first.contains("cs102"));
    assert!(first.contains("math102"));
}

#[test]
fn season_rotation_from_spring() {
    let courses = vec![
        CourseNode::new("A", 3),
        CourseNode::new("B", 3).with_prereq("A"),
        CourseNode::new("C", 3).with_prereq("B"),
    ];
    let request = PlanningRequest::new(TermId::new(Season::Spring, 2024), 3, 15);
    let generated = generate_plan(&request, &courses).unwrap();
    let names: Vec<&str> = generated
        .plan
        .semesters
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, vec!["Spring 2024", "Fall 2024", "Spring 2025"]);
}

#[test]
fn cycles_abort_generation() {
    let request = PlanningRequest::new(TermId::new(Season::Fall, 2024), 2, 15);

    let mutual = vec![
        CourseNode::new("A", 3).with_prereq("B"),
        CourseNode::new("B", 3).with_prereq("A"),
    ];
    assert!(matches!(
        generate_plan(&request, &mutual),
        Err(PlanError::CycleDetected { .. })
    ));

    let self_loop = vec![CourseNode::new("A", 3).with_prereq("A")];
    assert!(matches!(
        generate_plan(&request, &self_loop),
        Err(PlanError::CycleDetected { .. })
    ));
}

#[test]
fn insufficient_budget_reports_incomplete() {
    let courses = degree_courses();
    let request = PlanningRequest::new(TermId::new(Season::Fall, 2024), 1, 3);
    let generated = generate_plan(&request, &courses).unwrap();

    assert_eq!(generated.plan.course_count(), 1);
    let diag = generated
        .diagnostics
        .find(DiagnosticCode::IncompleteSchedule)
        .unwrap();
    assert_eq!(diag.detail("coursesPlaced"), Some(&serde_json::json!(1)));
    assert_eq!(
        diag.detail("totalCourses"),
        Some(&serde_json::json!(courses.len()))
    );
}

#[test]
fn unplaceable_course_trips_circuit_breaker() {
    let mut courses = degree_courses();
    courses.push(CourseNode::new("capstone", 12).with_prereq("cs301"));
    let request = PlanningRequest::new(TermId::new(Season::Fall, 2024), 20, 10);

    let generated = generate_plan(&request, &courses).unwrap();
    let diagnostics = &generated.diagnostics;

    assert!(diagnostics.has_code(DiagnosticCode::PlacementImpossible));
    assert!(diagnostics.has_code(DiagnosticCode::IncompleteSchedule));
    assert_eq!(diagnostics.count_code(DiagnosticCode::NoPlacement), 3);
    assert!(generated.plan.term_for_course("capstone").is_none());
    assert!(generated.plan.semester_count() < 20);
}

#[test]
fn scheduling_is_idempotent() {
    let courses = degree_courses();
    let request = PlanningRequest::new(TermId::new(Season::Fall, 2024), 5, 9).with_summer(true);

    let ordered = resolve(&courses).unwrap();
    let first = TermScheduler::new().schedule(&ordered, &request);
    let second = TermScheduler::new().schedule(&ordered, &request);
    assert_eq!(first, second);

    let kpi = PlanKpi::calculate(&first, &request);
    assert_eq!(kpi.terms_used, first.terms.len());
    assert!(kpi.cap_utilization <= 1.0);
}
