use benefit_synth::algorithm::eligibility::{BenefitRule, Decision, Disqualifier, standard_rules};
use benefit_synth::models::{
    EducationLevel, FamilyComposition, FamilySituation, IncomeTier, ProfessionStatus, Profile,
};
use benefit_synth::{Benefit, EligibilityEngine, ReplaySource, SynthError};

fn profile(age: u32, adults: u8, children: u8, income: IncomeTier) -> Profile {
    Profile {
        age,
        family: FamilyComposition::new(adults, children),
        profession: ProfessionStatus::Unemployed,
        situation: FamilySituation::Divorced,
        education: EducationLevel::Certificate,
        income,
    }
}

#[test]
fn test_one_draw_per_benefit() {
    let engine = EligibilityEngine::standard();
    let mut source = ReplaySource::new(vec![0.5]).unwrap();
    engine.evaluate(&profile(40, 1, 0, IncomeTier::Low), &mut source);
    assert_eq!(source.consumed(), Benefit::COUNT);
}

#[test]
fn test_low_income_lone_parent_gets_everything_eligible() {
    // Gates all open; only age rules and the VeryLow-only rule apply
    let engine = EligibilityEngine::standard();
    let mut source = ReplaySource::new(vec![0.0]).unwrap();
    let grants = engine.evaluate(&profile(55, 1, 2, IncomeTier::VeryLow), &mut source);

    let granted: Vec<Benefit> = grants.granted().collect();
    assert_eq!(
        granted,
        vec![
            Benefit::FamilyAllowance,
            Benefit::ActiveSolidarityIncome,
            Benefit::HousingAid,
            Benefit::LoneParentAllowance,
            Benefit::DisabledAdultAllowance,
            Benefit::SocialHousingAid,
            Benefit::SpecificSolidarityAllowance,
            Benefit::SpecificSolidarityAidAlt,
        ]
    );
}

#[test]
fn test_gate_boundary_per_benefit() {
    // An eligible profile is granted exactly when the draw is below the base probability
    let engine = EligibilityEngine::standard();
    let eligible = profile(62, 1, 3, IncomeTier::VeryLow);
    for rule in engine.rules() {
        let below = EligibilityEngine::decide(rule, &eligible, rule.base_probability - 1e-9);
        let at = EligibilityEngine::decide(rule, &eligible, rule.base_probability);
        assert_eq!(at, Decision::GateClosed, "{}", rule.benefit);
        if rule.is_eligible(&eligible) {
            assert_eq!(below, Decision::Granted, "{}", rule.benefit);
        }
    }
}

#[test]
fn test_explain_reports_reasons() {
    let engine = EligibilityEngine::standard();
    let mut source = ReplaySource::new(vec![0.0]).unwrap();
    let decisions = engine.explain(&profile(30, 2, 0, IncomeTier::High), &mut source);

    assert_eq!(decisions.len(), Benefit::COUNT);
    assert_eq!(
        decisions[0],
        (Benefit::FamilyAllowance, Decision::Disqualified(Disqualifier::ChildrenBelow(2)))
    );
    assert_eq!(
        decisions[3],
        (Benefit::LoneParentAllowance, Decision::Disqualified(Disqualifier::AdultsNot(1)))
    );
    assert_eq!(decisions[5], (Benefit::DisabledAdultAllowance, Decision::Granted));
}

#[test]
fn test_custom_rule_table() {
    let mut rules = standard_rules();
    rules[0] = BenefitRule::new(Benefit::FamilyAllowance, 1.0).disqualify_if(Disqualifier::NoChildren);
    let engine = EligibilityEngine::new(rules).unwrap();

    let mut source = ReplaySource::new(vec![0.999]).unwrap();
    let grants = engine.evaluate(&profile(30, 2, 1, IncomeTier::Medium), &mut source);
    assert!(grants.is_granted(Benefit::FamilyAllowance));
    assert_eq!(grants.count(), 1);
}

#[test]
fn test_lookup_by_name() {
    let engine = EligibilityEngine::standard();
    assert_eq!(engine.rule_by_name("paje").unwrap().benefit, Benefit::YoungChildBenefit);
    assert_eq!(
        engine.rule_by_name("Elderly Solidarity Aid").unwrap().base_probability,
        0.159
    );
    let err = engine.rule_by_name("Universal Credit").unwrap_err();
    assert!(matches!(err, SynthError::UnknownBenefit(_)));
    assert!(err.is_programming_error());
}
