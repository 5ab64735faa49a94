use std::rc::Rc;

use log::debug;
use serde::Serialize;
use yew::prelude::*;

pub const GENDERS: &[&str] = &["Male", "Female", "Other", "Prefer not to say"];
pub const SLEEP_DURATIONS: &[&str] = &["Less than 5 hours", "5-6 hours", "7-8 hours", "More than 8 hours"];
pub const SMOKING_STATUSES: &[&str] = &["No", "Yes - occasionally", "Yes - regularly", "Former smoker"];
pub const YES_NO: &[&str] = &["No", "Yes"];
pub const ALCOHOL_FREQUENCIES: &[&str] = &["Rarely", "1-2 times per week", "3-4 times per week", "Daily"];

pub const ACTIVITY_LEVELS: &[&str] = &[
    "Sedentary (desk job, minimal physical activity)",
    "Lightly active (light exercise 1-3 days/week)",
    "Moderately active (regular walking/standing, some exercise)",
    "Very active (hard exercise 4-5 days/week)",
    "Extremely active (hard exercise daily)",
];

pub const FITNESS_GOALS: &[&str] = &[
    "Weight loss",
    "Muscle gain",
    "Improve stamina/endurance",
    "Increase strength",
    "Improve flexibility/mobility",
    "General health & wellness",
    "Sports-specific performance",
];

pub const TIMELINES: &[&str] = &["1-3 months", "3-6 months", "6-12 months", "More than 1 year"];

/// Every free-text or single-choice answer on the form. Goals are a
/// multi-select and live separately on [`IntakeForm`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntakeField {
    FullName,
    Age,
    Gender,
    Height,
    Weight,
    Occupation,
    Email,
    ContactNumber,
    MedicalConditions,
    Medications,
    Injuries,
    JointPain,
    DoctorAdvice,
    SleepHours,
    Smoking,
    Alcohol,
    AlcoholFrequency,
    ActivityLevel,
    CurrentlyExercising,
    Timeline,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    PersonalInformation,
    MedicalHistory,
    Lifestyle,
    CurrentActivity,
    FitnessGoals,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::PersonalInformation,
        Section::MedicalHistory,
        Section::Lifestyle,
        Section::CurrentActivity,
        Section::FitnessGoals,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::PersonalInformation => "Personal Information",
            Section::MedicalHistory => "Medical History",
            Section::Lifestyle => "Lifestyle",
            Section::CurrentActivity => "Current Activity",
            Section::FitnessGoals => "Fitness Goals",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Section::PersonalInformation => "Basic details about yourself",
            Section::MedicalHistory => "Your health background",
            Section::Lifestyle => "Daily habits and routine",
            Section::CurrentActivity => "Your exercise routine",
            Section::FitnessGoals => "What you want to achieve",
        }
    }

    /// Fields that must be non-blank before leaving the section.
    pub fn required_fields(self) -> &'static [IntakeField] {
        use IntakeField::*;
        match self {
            Section::PersonalInformation => &[
                FullName,
                Age,
                Gender,
                Height,
                Weight,
                Occupation,
                Email,
                ContactNumber,
            ],
            Section::MedicalHistory => &[MedicalConditions, Medications, Injuries, JointPain, DoctorAdvice],
            // alcohol frequency is only asked after a "Yes" and stays optional
            Section::Lifestyle => &[SleepHours, Smoking, Alcohol, ActivityLevel],
            Section::CurrentActivity => &[CurrentlyExercising],
            Section::FitnessGoals => &[Timeline],
        }
    }

    pub fn requires_goals(self) -> bool {
        self == Section::FitnessGoals
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntakeForm {
    pub full_name: String,
    pub age: String,
    pub gender: String,
    pub height: String,
    pub weight: String,
    pub occupation: String,
    pub email: String,
    pub contact_number: String,
    pub medical_conditions: String,
    pub medications: String,
    pub injuries: String,
    pub joint_pain: String,
    pub doctor_advice: String,
    pub sleep_hours: String,
    pub smoking: String,
    pub alcohol: String,
    pub alcohol_frequency: String,
    pub activity_level: String,
    pub currently_exercising: String,
    pub goals: Vec<String>,
    pub timeline: String,
}

impl IntakeForm {
    pub fn get(&self, field: IntakeField) -> &str {
        match field {
            IntakeField::FullName => &self.full_name,
            IntakeField::Age => &self.age,
            IntakeField::Gender => &self.gender,
            IntakeField::Height => &self.height,
            IntakeField::Weight => &self.weight,
            IntakeField::Occupation => &self.occupation,
            IntakeField::Email => &self.email,
            IntakeField::ContactNumber => &self.contact_number,
            IntakeField::MedicalConditions => &self.medical_conditions,
            IntakeField::Medications => &self.medications,
            IntakeField::Injuries => &self.injuries,
            IntakeField::JointPain => &self.joint_pain,
            IntakeField::DoctorAdvice => &self.doctor_advice,
            IntakeField::SleepHours => &self.sleep_hours,
            IntakeField::Smoking => &self.smoking,
            IntakeField::Alcohol => &self.alcohol,
            IntakeField::AlcoholFrequency => &self.alcohol_frequency,
            IntakeField::ActivityLevel => &self.activity_level,
            IntakeField::CurrentlyExercising => &self.currently_exercising,
            IntakeField::Timeline => &self.timeline,
        }
    }

    pub fn set(&mut self, field: IntakeField, value: String) {
        let slot = match field {
            IntakeField::FullName => &mut self.full_name,
            IntakeField::Age => &mut self.age,
            IntakeField::Gender => &mut self.gender,
            IntakeField::Height => &mut self.height,
            IntakeField::Weight => &mut self.weight,
            IntakeField::Occupation => &mut self.occupation,
            IntakeField::Email => &mut self.email,
            IntakeField::ContactNumber => &mut self.contact_number,
            IntakeField::MedicalConditions => &mut self.medical_conditions,
            IntakeField::Medications => &mut self.medications,
            IntakeField::Injuries => &mut self.injuries,
            IntakeField::JointPain => &mut self.joint_pain,
            IntakeField::DoctorAdvice => &mut self.doctor_advice,
            IntakeField::SleepHours => &mut self.sleep_hours,
            IntakeField::Smoking => &mut self.smoking,
            IntakeField::Alcohol => &mut self.alcohol,
            IntakeField::AlcoholFrequency => &mut self.alcohol_frequency,
            IntakeField::ActivityLevel => &mut self.activity_level,
            IntakeField::CurrentlyExercising => &mut self.currently_exercising,
            IntakeField::Timeline => &mut self.timeline,
        };
        *slot = value;
    }

    /// Adds the goal, or removes it if already selected. Selection order is kept.
    pub fn toggle_goal(&mut self, goal: &str) {
        if let Some(pos) = self.goals.iter().position(|g| g == goal) {
            self.goals.remove(pos);
        } else {
            self.goals.push(goal.to_string());
        }
    }

    pub fn has_goal(&self, goal: &str) -> bool {
        self.goals.iter().any(|g| g == goal)
    }

    pub fn asks_alcohol_frequency(&self) -> bool {
        self.alcohol == "Yes"
    }

    pub fn is_complete(&self, section: Section) -> bool {
        let fields_filled = section
            .required_fields()
            .iter()
            .all(|field| !self.get(*field).trim().is_empty());
        fields_filled && (!section.requires_goals() || !self.goals.is_empty())
    }
}

/// Template parameters sent to the email service.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailPayload {
    pub full_name: String,
    pub age: String,
    pub gender: String,
    pub height: String,
    pub weight: String,
    pub occupation: String,
    pub contact: String,
    pub contact_number: String,
    pub medical_conditions: String,
    pub medications: String,
    pub injuries: String,
    pub joint_pain: String,
    pub doctor_advice: String,
    pub sleep_hours: String,
    pub smoking: String,
    pub alcohol: String,
    pub alcohol_frequency: String,
    pub activity_level: String,
    pub currently_exercising: String,
    pub goals: String,
    pub timeline: String,
}

impl From<&IntakeForm> for EmailPayload {
    fn from(form: &IntakeForm) -> Self {
        Self {
            full_name: form.full_name.clone(),
            age: form.age.clone(),
            gender: form.gender.clone(),
            height: form.height.clone(),
            weight: form.weight.clone(),
            occupation: form.occupation.clone(),
            contact: form.email.clone(),
            contact_number: form.contact_number.clone(),
            medical_conditions: form.medical_conditions.clone(),
            medications: form.medications.clone(),
            injuries: form.injuries.clone(),
            joint_pain: form.joint_pain.clone(),
            doctor_advice: form.doctor_advice.clone(),
            sleep_hours: form.sleep_hours.clone(),
            smoking: form.smoking.clone(),
            alcohol: form.alcohol.clone(),
            alcohol_frequency: form.alcohol_frequency.clone(),
            activity_level: form.activity_level.clone(),
            currently_exercising: form.currently_exercising.clone(),
            goals: form.goals.join(", "),
            timeline: form.timeline.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

#[derive(Clone, Debug, PartialEq)]
pub enum WizardAction {
    SetField(IntakeField, String),
    ToggleGoal(String),
    Next,
    Back,
    /// Clears every answer and returns to the first step.
    Reset,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct IntakeWizard {
    pub step: usize,
    pub form: IntakeForm,
}

impl IntakeWizard {
    pub fn section(&self) -> Section {
        Section::ALL[self.step]
    }

    pub fn step_count(&self) -> usize {
        Section::ALL.len()
    }

    pub fn is_last_step(&self) -> bool {
        self.step + 1 == Section::ALL.len()
    }

    pub fn is_section_complete(&self) -> bool {
        self.form.is_complete(self.section())
    }

    pub fn can_go_back(&self) -> bool {
        self.step > 0
    }

    pub fn can_advance(&self) -> bool {
        !self.is_last_step() && self.is_section_complete()
    }

    pub fn can_submit(&self) -> bool {
        self.is_last_step() && self.is_section_complete()
    }

    pub fn step_status(&self, index: usize) -> StepStatus {
        if index < self.step {
            StepStatus::Completed
        } else if index == self.step {
            StepStatus::Current
        } else {
            StepStatus::Upcoming
        }
    }

    pub fn payload(&self) -> EmailPayload {
        EmailPayload::from(&self.form)
    }
}

impl Reducible for IntakeWizard {
    type Action = WizardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            WizardAction::SetField(field, value) => next.form.set(field, value),
            WizardAction::ToggleGoal(goal) => next.form.toggle_goal(&goal),
            WizardAction::Next => {
                if !next.can_advance() {
                    debug!("Section {:?} incomplete; staying put", next.section());
                    return self;
                }
                next.step += 1;
            }
            WizardAction::Back => {
                if !next.can_go_back() {
                    return self;
                }
                next.step -= 1;
            }
            WizardAction::Reset => next = IntakeWizard::default(),
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_personal() -> IntakeForm {
        IntakeForm {
            full_name: "Asha Rao".to_string(),
            age: "29".to_string(),
            gender: "Female".to_string(),
            height: "165cm".to_string(),
            weight: "60 kg".to_string(),
            occupation: "Engineer".to_string(),
            email: "asha@example.com".to_string(),
            contact_number: "99851 41235".to_string(),
            ..IntakeForm::default()
        }
    }

    fn apply(wizard: IntakeWizard, actions: Vec<WizardAction>) -> Rc<IntakeWizard> {
        actions
            .into_iter()
            .fold(Rc::new(wizard), |state, action| state.reduce(action))
    }

    #[test]
    fn blank_or_whitespace_fields_block_the_section() {
        let mut form = filled_personal();
        assert!(form.is_complete(Section::PersonalInformation));
        form.set(IntakeField::Occupation, "   ".to_string());
        assert!(!form.is_complete(Section::PersonalInformation));
    }

    #[test]
    fn next_is_gated_on_completeness() {
        let wizard = apply(IntakeWizard::default(), vec![WizardAction::Next]);
        assert_eq!(wizard.step, 0);

        let wizard = apply(
            IntakeWizard {
                step: 0,
                form: filled_personal(),
            },
            vec![WizardAction::Next],
        );
        assert_eq!(wizard.step, 1);
        assert_eq!(wizard.section(), Section::MedicalHistory);
        assert!(!wizard.can_advance());
    }

    #[test]
    fn back_is_disabled_on_first_step() {
        let wizard = apply(IntakeWizard::default(), vec![WizardAction::Back]);
        assert_eq!(wizard.step, 0);
        assert!(!wizard.can_go_back());

        let wizard = apply(
            IntakeWizard {
                step: 3,
                form: IntakeForm::default(),
            },
            vec![WizardAction::Back],
        );
        assert_eq!(wizard.step, 2);
    }

    #[test]
    fn alcohol_frequency_is_optional() {
        let mut form = IntakeForm::default();
        for (field, value) in [
            (IntakeField::SleepHours, "7-8 hours"),
            (IntakeField::Smoking, "No"),
            (IntakeField::Alcohol, "Yes"),
            (IntakeField::ActivityLevel, ACTIVITY_LEVELS[2]),
        ] {
            form.set(field, value.to_string());
        }
        assert!(form.asks_alcohol_frequency());
        assert!(form.is_complete(Section::Lifestyle));
    }

    #[test]
    fn goals_section_needs_a_goal_and_a_timeline() {
        let mut form = IntakeForm::default();
        form.set(IntakeField::Timeline, TIMELINES[1].to_string());
        assert!(!form.is_complete(Section::FitnessGoals));
        form.toggle_goal(FITNESS_GOALS[0]);
        assert!(form.is_complete(Section::FitnessGoals));
    }

    #[test]
    fn toggle_goal_adds_and_removes_in_selection_order() {
        let mut form = IntakeForm::default();
        form.toggle_goal("Muscle gain");
        form.toggle_goal("Weight loss");
        form.toggle_goal("Increase strength");
        form.toggle_goal("Weight loss");
        assert_eq!(form.goals, vec!["Muscle gain", "Increase strength"]);
        assert!(form.has_goal("Muscle gain"));
        assert!(!form.has_goal("Weight loss"));
    }

    #[test]
    fn last_step_submits_instead_of_advancing() {
        let mut form = IntakeForm::default();
        form.toggle_goal("Weight loss");
        form.set(IntakeField::Timeline, "1-3 months".to_string());
        let wizard = apply(IntakeWizard { step: 4, form }, vec![WizardAction::Next]);
        assert_eq!(wizard.step, 4);
        assert!(wizard.is_last_step());
        assert!(!wizard.can_advance());
        assert!(wizard.can_submit());
    }

    #[test]
    fn step_statuses_follow_the_current_step() {
        let wizard = IntakeWizard {
            step: 2,
            form: IntakeForm::default(),
        };
        let statuses: Vec<StepStatus> = (0..wizard.step_count()).map(|i| wizard.step_status(i)).collect();
        assert_eq!(
            statuses,
            vec![
                StepStatus::Completed,
                StepStatus::Completed,
                StepStatus::Current,
                StepStatus::Upcoming,
                StepStatus::Upcoming,
            ]
        );
    }

    #[test]
    fn reset_clears_answers_and_returns_to_start() {
        let wizard = apply(
            IntakeWizard {
                step: 0,
                form: filled_personal(),
            },
            vec![WizardAction::Next, WizardAction::Reset],
        );
        assert_eq!(*wizard, IntakeWizard::default());
    }

    #[test]
    fn payload_uses_template_keys() {
        let mut form = filled_personal();
        form.toggle_goal("Weight loss");
        form.toggle_goal("Muscle gain");
        let payload = serde_json::to_value(EmailPayload::from(&form)).unwrap();

        assert_eq!(payload["fullName"], "Asha Rao");
        assert_eq!(payload["contact"], "asha@example.com");
        assert_eq!(payload["contactNumber"], "99851 41235");
        assert_eq!(payload["goals"], "Weight loss, Muscle gain");
        assert_eq!(payload["alcoholFrequency"], "");
        assert_eq!(payload.as_object().unwrap().len(), 21);
        assert!(payload.get("email").is_none());
    }
}
