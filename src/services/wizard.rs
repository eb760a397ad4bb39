use serde::Serialize;

use crate::error::PortalResult;

/// Linear multi-step form flow, steps 1..=4

pub const FIRST_STEP: u8 = 1;
pub const LAST_STEP: u8 = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StepOutcome<S> {
    Moved { step: u8 },
    Completed { summary: S },
}

/// What the page needs to draw the step indicator and the back/next buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepView {
    pub step: u8,
    pub can_go_back: bool,
    pub is_last_step: bool,
}

pub trait Wizard {
    type Summary;

    fn step(&self) -> u8;
    fn set_step(&mut self, step: u8);

    /// Required selection for `step` is present
    fn check_step(&self, step: u8) -> PortalResult<()>;

    /// Build the final summary. Called on the last step, before `reset`.
    fn summarize(&self) -> Self::Summary;

    /// Clear every selection and return to the first step
    fn reset(&mut self);

    /// Advance one step, or complete from the last one.
    /// A failed check leaves the step unchanged.
    fn next(&mut self) -> PortalResult<StepOutcome<Self::Summary>> {
        let step = self.step();
        self.check_step(step)?;

        if step < LAST_STEP {
            self.set_step(step + 1);
            Ok(StepOutcome::Moved { step: step + 1 })
        } else {
            let summary = self.summarize();
            self.reset();
            Ok(StepOutcome::Completed { summary })
        }
    }

    fn previous(&mut self) -> u8 {
        let step = self.step();
        if step > FIRST_STEP {
            self.set_step(step - 1);
        }
        self.step()
    }

    fn can_go_back(&self) -> bool {
        self.step() > FIRST_STEP
    }

    fn is_last_step(&self) -> bool {
        self.step() == LAST_STEP
    }

    fn view(&self) -> StepView {
        StepView {
            step: self.step(),
            can_go_back: self.can_go_back(),
            is_last_step: self.is_last_step(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PortalError;

    #[derive(Default)]
    struct Toy {
        step: u8,
        ticked: bool,
    }

    impl Wizard for Toy {
        type Summary = &'static str;

        fn step(&self) -> u8 {
            self.step.max(FIRST_STEP)
        }

        fn set_step(&mut self, step: u8) {
            self.step = step;
        }

        fn check_step(&self, step: u8) -> PortalResult<()> {
            if step == 1 && !self.ticked {
                return Err(PortalError::BodyPartRequired);
            }
            Ok(())
        }

        fn summarize(&self) -> Self::Summary {
            "done"
        }

        fn reset(&mut self) {
            *self = Toy::default();
        }
    }

    #[test]
    fn blocked_step_stays_put() {
        let mut toy = Toy::default();
        assert_eq!(toy.next(), Err(PortalError::BodyPartRequired));
        assert_eq!(
            toy.view(),
            StepView { step: 1, can_go_back: false, is_last_step: false }
        );
    }

    #[test]
    fn walks_forward_back_and_completes() {
        let mut toy = Toy { ticked: true, ..Default::default() };
        assert_eq!(toy.next(), Ok(StepOutcome::Moved { step: 2 }));
        assert_eq!(toy.previous(), 1);
        assert_eq!(toy.previous(), 1);

        for expected in 2..=4 {
            assert_eq!(toy.next(), Ok(StepOutcome::Moved { step: expected }));
        }
        assert_eq!(
            toy.view(),
            StepView { step: 4, can_go_back: true, is_last_step: true }
        );
        assert_eq!(toy.next(), Ok(StepOutcome::Completed { summary: "done" }));
        assert_eq!(toy.step(), 1);
        assert!(!toy.ticked);
    }
}
