use std::slice::Iter;

use crate::FilterOptionError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub name: String,
    pub exercise_type: String,
    pub muscle: String,
    pub equipment: String,
    pub difficulty: String,
    pub instructions: String,
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum ExerciseType {
    Cardio,
    OlympicWeightlifting,
    Plyometrics,
    Powerlifting,
    Strength,
    Stretching,
    Strongman,
}

impl Property for ExerciseType {
    fn iter() -> Iter<'static, ExerciseType> {
        static TYPES: [ExerciseType; 7] = [
            ExerciseType::Cardio,
            ExerciseType::OlympicWeightlifting,
            ExerciseType::Plyometrics,
            ExerciseType::Powerlifting,
            ExerciseType::Strength,
            ExerciseType::Stretching,
            ExerciseType::Strongman,
        ];
        TYPES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            ExerciseType::Cardio => "Cardio",
            ExerciseType::OlympicWeightlifting => "Olympic Weightlifting",
            ExerciseType::Plyometrics => "Plyometrics",
            ExerciseType::Powerlifting => "Powerlifting",
            ExerciseType::Strength => "Strength",
            ExerciseType::Stretching => "Stretching",
            ExerciseType::Strongman => "Strongman",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Muscle {
    Abdominals,
    Abductors,
    Adductors,
    Biceps,
    Calves,
    Chest,
    Forearms,
    Glutes,
    Hamstrings,
    Lats,
    LowerBack,
    MiddleBack,
    Neck,
    Quadriceps,
    Traps,
    Triceps,
}

impl Property for Muscle {
    fn iter() -> Iter<'static, Muscle> {
        static MUSCLES: [Muscle; 16] = [
            Muscle::Abdominals,
            Muscle::Abductors,
            Muscle::Adductors,
            Muscle::Biceps,
            Muscle::Calves,
            Muscle::Chest,
            Muscle::Forearms,
            Muscle::Glutes,
            Muscle::Hamstrings,
            Muscle::Lats,
            Muscle::LowerBack,
            Muscle::MiddleBack,
            Muscle::Neck,
            Muscle::Quadriceps,
            Muscle::Traps,
            Muscle::Triceps,
        ];
        MUSCLES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Muscle::Abdominals => "Abdominals",
            Muscle::Abductors => "Abductors",
            Muscle::Adductors => "Adductors",
            Muscle::Biceps => "Biceps",
            Muscle::Calves => "Calves",
            Muscle::Chest => "Chest",
            Muscle::Forearms => "Forearms",
            Muscle::Glutes => "Glutes",
            Muscle::Hamstrings => "Hamstrings",
            Muscle::Lats => "Lats",
            Muscle::LowerBack => "Lower Back",
            Muscle::MiddleBack => "Middle Back",
            Muscle::Neck => "Neck",
            Muscle::Quadriceps => "Quadriceps",
            Muscle::Traps => "Traps",
            Muscle::Triceps => "Triceps",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
}

impl Property for Difficulty {
    fn iter() -> Iter<'static, Difficulty> {
        static DIFFICULTY: [Difficulty; 3] = [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Expert,
        ];
        DIFFICULTY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Expert => "Expert",
        }
    }
}

/// One of the independent facets a search can be narrowed by.
#[derive(strum::Display, Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[strum(serialize_all = "lowercase")]
pub enum FilterCategory {
    Type,
    Muscle,
    Difficulty,
}

impl FilterCategory {
    pub fn iter() -> Iter<'static, FilterCategory> {
        static CATEGORIES: [FilterCategory; 3] = [
            FilterCategory::Type,
            FilterCategory::Muscle,
            FilterCategory::Difficulty,
        ];
        CATEGORIES.iter()
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            FilterCategory::Type => "Exercise Type",
            FilterCategory::Muscle => "Target Muscle",
            FilterCategory::Difficulty => "Difficulty",
        }
    }

    /// Options of this category in catalog order.
    #[must_use]
    pub fn options(self) -> Vec<FilterOption> {
        match self {
            FilterCategory::Type => ExerciseType::iter()
                .map(|t| FilterOption::Type(*t))
                .collect(),
            FilterCategory::Muscle => Muscle::iter().map(|m| FilterOption::Muscle(*m)).collect(),
            FilterCategory::Difficulty => Difficulty::iter()
                .map(|d| FilterOption::Difficulty(*d))
                .collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FilterOption {
    Type(ExerciseType),
    Muscle(Muscle),
    Difficulty(Difficulty),
}

impl FilterOption {
    /// Resolves an option by its displayed name within the given category.
    pub fn new(category: FilterCategory, name: &str) -> Result<Self, FilterOptionError> {
        category
            .options()
            .into_iter()
            .find(|o| o.name() == name)
            .ok_or_else(|| FilterOptionError::Unknown {
                category,
                name: name.to_string(),
            })
    }

    #[must_use]
    pub fn category(self) -> FilterCategory {
        match self {
            FilterOption::Type(_) => FilterCategory::Type,
            FilterOption::Muscle(_) => FilterCategory::Muscle,
            FilterOption::Difficulty(_) => FilterCategory::Difficulty,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FilterOption::Type(t) => t.name(),
            FilterOption::Muscle(m) => m.name(),
            FilterOption::Difficulty(d) => d.name(),
        }
    }

    /// Value transmitted to the exercise API.
    ///
    /// Muscles and difficulties are lowercased, types are sent as displayed.
    #[must_use]
    pub fn api_value(self) -> String {
        match self {
            FilterOption::Type(t) => t.name().to_string(),
            FilterOption::Muscle(m) => m.name().to_lowercase(),
            FilterOption::Difficulty(d) => d.name().to_lowercase(),
        }
    }
}

impl From<ExerciseType> for FilterOption {
    fn from(value: ExerciseType) -> Self {
        FilterOption::Type(value)
    }
}

impl From<Muscle> for FilterOption {
    fn from(value: Muscle) -> Self {
        FilterOption::Muscle(value)
    }
}

impl From<Difficulty> for FilterOption {
    fn from(value: Difficulty) -> Self {
        FilterOption::Difficulty(value)
    }
}
