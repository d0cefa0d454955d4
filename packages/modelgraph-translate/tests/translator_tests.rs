//! Translation engine behavior tests
//!
//! Exercises the dispatcher guarantees: at-most-once translation, cycle
//! safety, untranslated completeness, diagnostics accumulation, idempotent
//! re-requests, fan-out, dangling references, and cancellation.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;

use modelgraph_translate::features::translation::rules::{SurfaceRule, ZoneRule};
use modelgraph_translate::{
    FieldValue, Handle, IdfRecord, ObjectType, ProgressSink, ReverseTranslator, RuleContext,
    RuleRegistry, TranslationRule, Workspace,
};

fn zone_record(name: &str) -> IdfRecord {
    IdfRecord::new(ObjectType::Zone, vec![FieldValue::String(name.into())])
}

fn surface_fields(name: &str, zone: Handle) -> Vec<FieldValue> {
    vec![
        FieldValue::String(name.into()),
        FieldValue::String("Wall".into()),
        FieldValue::Empty,
        FieldValue::Reference(zone),
    ]
}

/// Counts invocations on top of the stock zone rule
struct CountingZoneRule {
    calls: Arc<AtomicUsize>,
}

impl TranslationRule for CountingZoneRule {
    fn object_type(&self) -> ObjectType {
        ObjectType::Zone
    }

    fn translate(&self, record: &IdfRecord, ctx: &mut dyn RuleContext) -> Option<Vec<Handle>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        ZoneRule.translate(record, ctx)
    }
}

#[test]
fn rule_invoked_at_most_once_per_record() {
    let mut ws = Workspace::new();
    let zone = ws.add_record(zone_record("Shared"));
    // Three surfaces all pull the same zone through the dispatcher.
    for name in ["S1", "S2", "S3"] {
        ws.add(ObjectType::Surface, surface_fields(name, zone));
    }

    let calls = Arc::new(AtomicUsize::new(0));
    let mut registry = RuleRegistry::new();
    registry.register(Box::new(CountingZoneRule {
        calls: Arc::clone(&calls),
    }));
    registry.register(Box::new(SurfaceRule));

    let result = ReverseTranslator::new(registry).translate_workspace(&ws);

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(result.model.objects_of_kind("Surface").len(), 3);
    assert_eq!(result.model.objects_of_kind("Zone").len(), 1);
}

#[test]
fn mutual_surface_cycle_translates_and_cross_links() {
    let mut ws = Workspace::new();
    let zone = ws.add_record(zone_record("Z"));

    let mut rec_a = IdfRecord::new(ObjectType::Surface, Vec::new());
    let mut rec_b = IdfRecord::new(ObjectType::Surface, Vec::new());
    let (handle_a, handle_b) = (rec_a.handle, rec_b.handle);
    rec_a.fields = vec![
        FieldValue::String("A".into()),
        FieldValue::String("Wall".into()),
        FieldValue::Empty,
        FieldValue::Reference(zone),
        FieldValue::Reference(handle_b),
    ];
    rec_b.fields = vec![
        FieldValue::String("B".into()),
        FieldValue::String("Wall".into()),
        FieldValue::Empty,
        FieldValue::Reference(zone),
        FieldValue::Reference(handle_a),
    ];
    ws.add_record(rec_a);
    ws.add_record(rec_b);

    let result = ReverseTranslator::default().translate_workspace(&ws);

    assert!(result.diagnostics.is_empty());
    let (ha, a) = result.model.find_by_name("A").unwrap();
    let (hb, b) = result.model.find_by_name("B").unwrap();
    assert_eq!(a.as_surface().unwrap().adjacent_surface, Some(hb));
    assert_eq!(b.as_surface().unwrap().adjacent_surface, Some(ha));
}

#[test]
fn untranslated_records_surface_exactly_once() {
    let mut ws = Workspace::new();
    let zone = ws.add_record(zone_record("Z"));
    let version = ws.add(ObjectType::Version, vec![FieldValue::Real(9.2)]);
    let unknown = ws.add(
        ObjectType::Other("Output:Variable".into()),
        vec![FieldValue::String("V".into())],
    );
    // Two constructions both reference the unsupported record.
    for name in ["C1", "C2"] {
        ws.add(
            ObjectType::Construction,
            vec![
                FieldValue::String(name.into()),
                FieldValue::Reference(unknown),
            ],
        );
    }

    let result = ReverseTranslator::default().translate_workspace(&ws);

    assert_eq!(result.untranslated, vec![version, unknown]);
    assert!(!result.untranslated.contains(&zone));
    // The constructions still translated, each reporting its lost layer.
    assert_eq!(result.model.objects_of_kind("Construction").len(), 2);
    assert_eq!(result.errors().len(), 2);
}

#[test]
fn malformed_records_accumulate_errors_without_aborting() {
    let mut ws = Workspace::new();
    ws.add_record(zone_record("Valid"));
    // Missing required Thickness/Conductivity fields.
    ws.add(
        ObjectType::Material,
        vec![
            FieldValue::String("M1".into()),
            FieldValue::String("Rough".into()),
        ],
    );
    ws.add(
        ObjectType::Material,
        vec![
            FieldValue::String("M2".into()),
            FieldValue::String("Rough".into()),
        ],
    );

    let result = ReverseTranslator::default().translate_workspace(&ws);

    assert_eq!(result.errors().len(), 2);
    assert!(result.warnings().is_empty());
    assert!(!result.model.is_empty());
    assert!(result.model.find_by_name("Valid").is_some());
}

#[test]
fn errored_records_are_failed_not_untranslated() {
    let mut ws = Workspace::new();
    // Missing required Thickness/Conductivity fields.
    let malformed = ws.add(
        ObjectType::Material,
        vec![
            FieldValue::String("Bad".into()),
            FieldValue::String("Rough".into()),
        ],
    );
    let declined = ws.add(ObjectType::Version, vec![FieldValue::Real(9.2)]);

    let result = ReverseTranslator::default().translate_workspace(&ws);

    // The malformed record's story is its error diagnostic; only the clean
    // decline belongs in the untranslated set.
    assert_eq!(result.errors().len(), 1);
    assert!(!result.untranslated.contains(&malformed));
    assert_eq!(result.untranslated, vec![declined]);
}

/// Requests the same related record twice and stores what came back
struct DoubleRequestRule {
    seen: Arc<Mutex<Vec<Option<Handle>>>>,
}

impl TranslationRule for DoubleRequestRule {
    fn object_type(&self) -> ObjectType {
        ObjectType::Other("Probe".into())
    }

    fn translate(&self, record: &IdfRecord, ctx: &mut dyn RuleContext) -> Option<Vec<Handle>> {
        let target = record.reference_field(1)?;
        let first = ctx.translate(target);
        let second = ctx.translate(target);
        let mut seen = self.seen.lock().unwrap();
        seen.push(first);
        seen.push(second);
        None
    }
}

#[test]
fn re_requesting_an_identity_yields_the_same_object() {
    let mut ws = Workspace::new();
    let zone = ws.add_record(zone_record("Z"));
    ws.add(
        ObjectType::Other("Probe".into()),
        vec![FieldValue::String("p".into()), FieldValue::Reference(zone)],
    );

    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut registry = RuleRegistry::new();
    registry.register(Box::new(ZoneRule));
    registry.register(Box::new(DoubleRequestRule {
        seen: Arc::clone(&seen),
    }));

    ReverseTranslator::new(registry).translate_workspace(&ws);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert!(seen[0].is_some());
    assert_eq!(seen[0], seen[1]);
}

#[test]
fn composite_record_fans_out_into_linked_objects() {
    let mut ws = Workspace::new();
    ws.add(
        ObjectType::WaterHeaterHeatPump,
        vec![
            FieldValue::String("HPWH".into()),
            FieldValue::Real(0.3),
            FieldValue::Real(2500.0),
            FieldValue::Real(0.2),
        ],
    );

    let result = ReverseTranslator::default().translate_workspace(&ws);

    assert_eq!(result.model.len(), 4);
    let (_, hp) = result.model.find_by_name("HPWH").unwrap();
    let hp = hp.as_heat_pump_water_heater().unwrap();
    assert!(result.model.contains(hp.tank));
    assert!(result.model.contains(hp.dx_coil));
    assert!(result.model.contains(hp.fan));
    assert_eq!(result.model.get(hp.tank).unwrap().name(), "HPWH Tank");
}

#[test]
fn dangling_reference_reports_error_and_proceeds_partially() {
    let mut ws = Workspace::new();
    let nowhere = Handle::new();
    ws.add(ObjectType::Surface, surface_fields("Orphan", nowhere));

    let result = ReverseTranslator::default().translate_workspace(&ws);

    assert_eq!(result.errors().len(), 1);
    assert!(result.errors()[0].message.contains("not present"));
    let (_, surface) = result.model.find_by_name("Orphan").unwrap();
    assert_eq!(surface.as_surface().unwrap().zone, None);
}

#[test]
fn end_to_end_zone_and_wall() {
    let mut ws = Workspace::new();
    let zone = ws.add_record(zone_record("Office"));
    ws.add(ObjectType::Surface, surface_fields("N-Wall", zone));

    let result = ReverseTranslator::default().translate_workspace(&ws);

    assert!(result.is_clean());
    assert!(result.diagnostics.is_empty());
    assert!(result.untranslated.is_empty());
    assert_eq!(result.model.len(), 2);

    let (zone_handle, zone_obj) = result.model.find_by_name("Office").unwrap();
    assert_eq!(zone_obj.as_zone().unwrap().name, "Office");
    let (_, wall) = result.model.find_by_name("N-Wall").unwrap();
    assert_eq!(wall.as_surface().unwrap().zone, Some(zone_handle));
}

/// Cancels once any record has completed
struct CancelAfterFirst {
    ticked: AtomicBool,
}

impl ProgressSink for CancelAfterFirst {
    fn tick(&self, completed: usize, _total: usize) {
        if completed >= 1 {
            self.ticked.store(true, Ordering::SeqCst);
        }
    }

    fn cancelled(&self) -> bool {
        self.ticked.load(Ordering::SeqCst)
    }
}

#[test]
fn cancellation_returns_partial_result() {
    let mut ws = Workspace::new();
    for name in ["Z1", "Z2", "Z3"] {
        ws.add_record(zone_record(name));
    }

    let translator = ReverseTranslator::default().with_progress(Box::new(CancelAfterFirst {
        ticked: AtomicBool::new(false),
    }));
    let result = translator.translate_workspace(&ws);

    // Z1 translated, then cancellation was observed before Z2.
    assert_eq!(result.model.len(), 1);
    assert!(result.model.find_by_name("Z1").is_some());
}

/// Records every tick and cancels once any record has completed
struct TickRecorder {
    ticks: Arc<Mutex<Vec<(usize, usize)>>>,
}

impl ProgressSink for TickRecorder {
    fn tick(&self, completed: usize, total: usize) {
        self.ticks.lock().unwrap().push((completed, total));
    }

    fn cancelled(&self) -> bool {
        self.ticks
            .lock()
            .unwrap()
            .iter()
            .any(|&(completed, _)| completed >= 1)
    }
}

#[test]
fn cancelled_run_never_reports_completion() {
    let mut ws = Workspace::new();
    for name in ["Z1", "Z2", "Z3"] {
        ws.add_record(zone_record(name));
    }

    let ticks = Arc::new(Mutex::new(Vec::new()));
    let translator = ReverseTranslator::default().with_progress(Box::new(TickRecorder {
        ticks: Arc::clone(&ticks),
    }));
    translator.translate_workspace(&ws);

    // Cancellation was observed at the second tick; the final "all done"
    // tick must not follow.
    assert_eq!(*ticks.lock().unwrap(), vec![(0, 3), (1, 3)]);
}

#[test]
fn declined_rules_mark_records_untranslated_without_diagnostics() {
    let mut ws = Workspace::new();
    let version = ws.add(ObjectType::Version, vec![FieldValue::Real(9.2)]);

    let result = ReverseTranslator::default().translate_workspace(&ws);

    assert_eq!(result.untranslated, vec![version]);
    assert!(result.diagnostics.is_empty());
    assert!(result.model.is_empty());
}

#[test]
fn model_object_handles_differ_from_source_handles() {
    let mut ws = Workspace::new();
    let source = ws.add_record(zone_record("Z"));

    let result = ReverseTranslator::default().translate_workspace(&ws);

    let (dest, _) = result.model.find_by_name("Z").unwrap();
    assert_ne!(source, dest);
}
