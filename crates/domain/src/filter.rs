use crate::{
    Difficulty, ExerciseType, FilterCategory, FilterOption, FilterOptionError, Muscle, Property,
};

/// Selected filter option per category.
///
/// Every category holds at most one selection. Selecting another option of a category replaces
/// the previous selection, selecting the current option again clears it.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct SelectionState {
    exercise_type: Option<ExerciseType>,
    muscle: Option<Muscle>,
    difficulty: Option<Difficulty>,
}

impl SelectionState {
    #[must_use]
    pub fn exercise_type(&self) -> Option<ExerciseType> {
        self.exercise_type
    }

    #[must_use]
    pub fn muscle(&self) -> Option<Muscle> {
        self.muscle
    }

    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    #[must_use]
    pub fn selected(&self, category: FilterCategory) -> Option<FilterOption> {
        match category {
            FilterCategory::Type => self.exercise_type.map(FilterOption::Type),
            FilterCategory::Muscle => self.muscle.map(FilterOption::Muscle),
            FilterCategory::Difficulty => self.difficulty.map(FilterOption::Difficulty),
        }
    }

    #[must_use]
    pub fn is_selected(&self, option: FilterOption) -> bool {
        self.selected(option.category()) == Some(option)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercise_type.is_none() && self.muscle.is_none() && self.difficulty.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn toggle(&mut self, option: FilterOption) {
        match option {
            FilterOption::Type(t) => toggle_slot(&mut self.exercise_type, t),
            FilterOption::Muscle(m) => toggle_slot(&mut self.muscle, m),
            FilterOption::Difficulty(d) => toggle_slot(&mut self.difficulty, d),
        }
    }

    #[must_use]
    pub fn toggled(&self, option: FilterOption) -> Self {
        let mut state = *self;
        state.toggle(option);
        state
    }

    /// Toggles the option with the given displayed name.
    pub fn toggle_name(
        &mut self,
        category: FilterCategory,
        name: &str,
    ) -> Result<FilterOption, FilterOptionError> {
        let option = FilterOption::new(category, name)?;
        self.toggle(option);
        Ok(option)
    }

    #[must_use]
    pub fn type_list(&self) -> Vec<(ExerciseType, bool)> {
        ExerciseType::iter()
            .map(|t| (*t, self.exercise_type == Some(*t)))
            .collect::<Vec<_>>()
    }

    #[must_use]
    pub fn muscle_list(&self) -> Vec<(Muscle, bool)> {
        Muscle::iter()
            .map(|m| (*m, self.muscle == Some(*m)))
            .collect::<Vec<_>>()
    }

    #[must_use]
    pub fn difficulty_list(&self) -> Vec<(Difficulty, bool)> {
        Difficulty::iter()
            .map(|d| (*d, self.difficulty == Some(*d)))
            .collect::<Vec<_>>()
    }
}

fn toggle_slot<T: PartialEq>(slot: &mut Option<T>, value: T) {
    if slot.as_ref() == Some(&value) {
        *slot = None;
    } else {
        *slot = Some(value);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn all_options() -> Vec<FilterOption> {
        FilterCategory::iter().flat_map(|c| c.options()).collect()
    }

    fn selection(options: &[FilterOption]) -> SelectionState {
        options
            .iter()
            .fold(SelectionState::default(), |s, o| s.toggled(*o))
    }

    #[test]
    fn test_toggle_selects_and_deselects() {
        let mut state = SelectionState::default();

        state.toggle(Muscle::Biceps.into());
        assert_eq!(state.muscle(), Some(Muscle::Biceps));

        state.toggle(Muscle::Biceps.into());
        assert_eq!(state.muscle(), None);
        assert!(state.is_empty());
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let states = [
            SelectionState::default(),
            selection(&[ExerciseType::Cardio.into()]),
            selection(&[Muscle::Chest.into(), Difficulty::Expert.into()]),
            selection(&[
                ExerciseType::Strongman.into(),
                Muscle::Neck.into(),
                Difficulty::Beginner.into(),
            ]),
        ];

        for state in states {
            for option in all_options()
                .into_iter()
                .filter(|o| state.selected(o.category()).is_none_or(|s| s == *o))
            {
                assert_eq!(state.toggled(option).toggled(option), state);
            }
        }
    }

    #[test]
    fn test_toggle_twice_after_replace_clears_category() {
        let state = selection(&[ExerciseType::Cardio.into()])
            .toggled(ExerciseType::Strength.into())
            .toggled(ExerciseType::Strength.into());

        assert_eq!(state.exercise_type(), None);
        assert!(state.is_empty());
    }

    #[test]
    fn test_toggle_replaces_selection_within_category() {
        let state = selection(&[Muscle::Biceps.into(), Muscle::Triceps.into()]);

        assert_eq!(state.muscle(), Some(Muscle::Triceps));
        assert!(!state.is_selected(Muscle::Biceps.into()));
        assert_eq!(state.muscle_list().iter().filter(|(_, s)| *s).count(), 1);
    }

    #[test]
    fn test_toggle_does_not_affect_other_categories() {
        let state = selection(&[
            ExerciseType::Cardio.into(),
            Difficulty::Intermediate.into(),
        ]);

        let toggled = state.toggled(Muscle::Glutes.into());

        assert_eq!(toggled.exercise_type(), Some(ExerciseType::Cardio));
        assert_eq!(toggled.difficulty(), Some(Difficulty::Intermediate));
        assert_eq!(toggled.muscle(), Some(Muscle::Glutes));
    }

    #[test]
    fn test_at_most_one_selection_per_category() {
        let mut state = SelectionState::default();

        for option in all_options() {
            state.toggle(option);
            assert!(state.type_list().iter().filter(|(_, s)| *s).count() <= 1);
            assert!(state.muscle_list().iter().filter(|(_, s)| *s).count() <= 1);
            assert!(state.difficulty_list().iter().filter(|(_, s)| *s).count() <= 1);
        }

        assert_eq!(state.exercise_type(), Some(ExerciseType::Strongman));
        assert_eq!(state.muscle(), Some(Muscle::Triceps));
        assert_eq!(state.difficulty(), Some(Difficulty::Expert));
    }

    #[rstest]
    #[case(FilterCategory::Type, None)]
    #[case(FilterCategory::Muscle, Some(Muscle::Lats.into()))]
    #[case(FilterCategory::Difficulty, Some(Difficulty::Beginner.into()))]
    fn test_selected(#[case] category: FilterCategory, #[case] expected: Option<FilterOption>) {
        let state = selection(&[Muscle::Lats.into(), Difficulty::Beginner.into()]);
        assert_eq!(state.selected(category), expected);
    }

    #[test]
    fn test_toggle_name() {
        let mut state = SelectionState::default();

        assert_eq!(
            state.toggle_name(FilterCategory::Type, "Cardio"),
            Ok(ExerciseType::Cardio.into())
        );
        assert_eq!(state.exercise_type(), Some(ExerciseType::Cardio));

        assert!(state.toggle_name(FilterCategory::Type, "Yoga").is_err());
        assert_eq!(state.exercise_type(), Some(ExerciseType::Cardio));
    }

    #[test]
    fn test_clear() {
        let mut state = selection(&[ExerciseType::Strength.into(), Muscle::Calves.into()]);
        state.clear();
        assert_eq!(state, SelectionState::default());
    }

    #[test]
    fn test_difficulty_list() {
        assert_eq!(
            selection(&[Difficulty::Intermediate.into()]).difficulty_list(),
            vec![
                (Difficulty::Beginner, false),
                (Difficulty::Intermediate, true),
                (Difficulty::Expert, false),
            ]
        );
    }
}
