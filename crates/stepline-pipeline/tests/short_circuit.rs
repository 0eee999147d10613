//! Integration tests for sequential execution and short-circuit on halt.

use std::cell::RefCell;

use stepline_pipeline::{Pipeline, PipelineStep, StepOutcome};

struct TestContext {
    invoked: RefCell<Vec<String>>,
}

impl TestContext {
    fn new() -> Self {
        Self {
            invoked: RefCell::new(Vec::new()),
        }
    }

    fn invoked(&self) -> Vec<String> {
        self.invoked.borrow().clone()
    }
}

struct PassStep {
    name: String,
}

impl PipelineStep<String, TestContext> for PassStep {
    fn run(&self, ctx: &TestContext, payload: String) -> StepOutcome<String> {
        ctx.invoked.borrow_mut().push(self.name.clone());
        StepOutcome::Continue(format!("{payload}>{}", self.name))
    }
}

struct HaltStep {
    name: String,
}

impl PipelineStep<String, TestContext> for HaltStep {
    fn run(&self, ctx: &TestContext, _payload: String) -> StepOutcome<String> {
        ctx.invoked.borrow_mut().push(self.name.clone());
        StepOutcome::Halt
    }
}

fn pipeline_halting_at(halt_at: Option<usize>, len: usize) -> Pipeline<String, TestContext> {
    let mut pipeline = Pipeline::<String, TestContext>::new();
    for index in 0..len {
        let name = format!("step_{index}");
        if halt_at == Some(index) {
            pipeline.register(name.clone(), HaltStep { name });
        } else {
            pipeline.register(name.clone(), PassStep { name });
        }
    }
    pipeline
}

#[test]
fn all_passing_steps_yield_one_true_per_step() {
    for len in 0..6 {
        let ctx = TestContext::new();
        let pipeline = pipeline_halting_at(None, len);

        let outcomes: Vec<bool> = pipeline.execute(&ctx, String::new()).collect();

        assert_eq!(outcomes, vec![true; len]);
        let expected: Vec<String> = (0..len).map(|i| format!("step_{i}")).collect();
        assert_eq!(ctx.invoked(), expected);
    }
}

#[test]
fn first_halt_at_k_yields_k_outcomes_and_skips_the_rest() {
    let len = 5;
    for halt_at in 0..len {
        let ctx = TestContext::new();
        let pipeline = pipeline_halting_at(Some(halt_at), len);

        let outcomes: Vec<bool> = pipeline.execute(&ctx, String::new()).collect();

        let mut expected = vec![true; halt_at];
        expected.push(false);
        assert_eq!(outcomes, expected);
        assert_eq!(ctx.invoked().len(), halt_at + 1);
        assert_eq!(
            ctx.invoked().last().map(String::as_str),
            Some(format!("step_{halt_at}").as_str())
        );
    }
}

#[test]
fn payload_flows_through_steps_in_order() {
    let ctx = TestContext::new();
    let pipeline = Pipeline::<String, TestContext>::new()
        .with_step("a", PassStep { name: "a".to_string() })
        .with_step("b", PassStep { name: "b".to_string() })
        .with_step("c", PassStep { name: "c".to_string() });

    let mut execution = pipeline.execute(&ctx, "start".to_string());
    assert!(execution.by_ref().all(|passed| passed));

    assert_eq!(execution.into_payload().as_deref(), Some("start>a>b>c"));
}

#[test]
fn replaced_step_runs_at_original_position() {
    let ctx = TestContext::new();
    let mut pipeline = Pipeline::<String, TestContext>::new();
    pipeline
        .register("first", PassStep { name: "first".to_string() })
        .register("second", PassStep { name: "second".to_string() })
        .register("first", HaltStep { name: "first-replacement".to_string() });

    let outcomes: Vec<bool> = pipeline.execute(&ctx, String::new()).collect();

    assert_eq!(outcomes, vec![false]);
    assert_eq!(ctx.invoked(), vec!["first-replacement".to_string()]);
    assert_eq!(pipeline.step_names().collect::<Vec<_>>(), vec!["first", "second"]);
}

#[test]
fn side_effect_free_pipeline_is_repeatable() {
    let pipeline = Pipeline::<i32>::new()
        .with_step_fn("inc", |_, n| StepOutcome::Continue(n + 1))
        .with_step_fn("even_only", |_, n| {
            if n % 2 == 0 {
                StepOutcome::Continue(n)
            } else {
                StepOutcome::Halt
            }
        })
        .with_step_fn("square", |_, n| StepOutcome::Continue(n * n));

    for initial in [1, 2] {
        let first: Vec<bool> = pipeline.execute(&(), initial).collect();
        let second: Vec<bool> = pipeline.execute(&(), initial).collect();
        assert_eq!(first, second);
    }
}

#[test]
fn pulling_one_outcome_runs_exactly_one_step() {
    let ctx = TestContext::new();
    let pipeline = pipeline_halting_at(None, 10);

    let first = pipeline.execute(&ctx, String::new()).next();

    assert_eq!(first, Some(true));
    assert_eq!(ctx.invoked(), vec!["step_0".to_string()]);
}

#[test]
fn side_effects_of_halting_step_are_kept() {
    let ctx = TestContext::new();
    let pipeline = Pipeline::<String, TestContext>::new()
        .with_step("ok", PassStep { name: "ok".to_string() })
        .with_step("stop", HaltStep { name: "stop".to_string() });

    let report = pipeline.run_to_end(&ctx, String::new());

    assert_eq!(report.halted_at(), Some("stop"));
    assert_eq!(ctx.invoked(), vec!["ok".to_string(), "stop".to_string()]);
}
