use tool_core::model::{Artifact, ArtifactType};
use tool_core::resolve::{classify, resolve, BoundSlot};
use tool_core::signature::ParameterSlot;
use tool_core::CoreError;
use tool_domain::{BinFile, ClassId, Node, TextFile};

fn node(class: ClassId, tag: u8) -> Artifact {
    Artifact::Node(Node::build(class, &[], &[tag]))
}

fn tag(artifact: &Artifact) -> u8 {
    artifact.as_node().and_then(|n| n.bytes().last().copied()).expect("tagged node")
}

#[test]
fn singleton_only_binding_yields_one_instance_with_every_artifact() {
    let inputs = vec![node(ClassId::REPLAY, 1), node(ClassId::MAP, 2), Artifact::Text(TextFile::new("notes"))];
    let sig = [ParameterSlot::node("map", ClassId::MAP),
               ParameterSlot::node("replay", ClassId::REPLAY),
               ParameterSlot::text("notes")];

    let mut queues = classify(inputs);
    let binding = resolve([&sig[..]], &mut queues).expect("binding");
    let instances: Vec<_> = binding.expand(false).collect();

    assert_eq!(instances.len(), 1);
    let args = &instances[0];
    assert_eq!(args.node(0).expect("map").class(), ClassId::MAP);
    assert_eq!(args.node(1).expect("replay").class(), ClassId::REPLAY);
    assert_eq!(args.text(2).expect("notes").text(), "notes");
    // cada artifact aparece exactamente una vez
    assert_eq!(binding.artifact_count(), 3);
}

#[test]
fn bulk_slot_splits_into_one_instance_per_artifact_in_order() {
    let mut inputs: Vec<Artifact> = (0..4).map(|i| node(ClassId::GHOST, i)).collect();
    inputs.insert(2, node(ClassId::MAP, 99));
    let sig = [ParameterSlot::node("map", ClassId::MAP), ParameterSlot::nodes("ghosts", ClassId::GHOST)];

    let mut queues = classify(inputs);
    let binding = resolve([&sig[..]], &mut queues).expect("binding");
    assert_eq!(binding.bulk_slot(), Some(1));

    let mut seen = Vec::new();
    for args in binding.expand(false) {
        assert_eq!(args.node(0).expect("map").bytes().last(), Some(&99));
        let ghosts = args.value(1).expect("ghost slot").artifacts();
        assert_eq!(ghosts.len(), 1);
        seen.push(tag(ghosts[0]));
    }
    assert_eq!(seen, vec![0, 1, 2, 3]);
}

#[test]
fn resolution_is_deterministic_across_type_order() {
    let sigs = [vec![ParameterSlot::node("replay", ClassId::REPLAY), ParameterSlot::nodes("maps", ClassId::MAP)],
                vec![ParameterSlot::nodes("maps", ClassId::MAP)]];
    let a = vec![node(ClassId::MAP, 1), node(ClassId::REPLAY, 7), node(ClassId::MAP, 2)];
    let b = vec![node(ClassId::REPLAY, 7), node(ClassId::MAP, 1), node(ClassId::MAP, 2)];

    let pick = |inputs: Vec<Artifact>| {
        let mut queues = classify(inputs);
        let binding = resolve(sigs.iter().map(Vec::as_slice), &mut queues).expect("binding");
        let maps: Vec<u8> = match &binding.slots()[1] {
            BoundSlot::Collection(items) => items.iter().map(|a| tag(a)).collect(),
            BoundSlot::Single(_) => panic!("maps slot is a collection"),
        };
        (binding.signature_index(), maps)
    };

    assert_eq!(pick(a), (0, vec![1, 2]));
    assert_eq!(pick(b), (0, vec![1, 2]));
}

#[test]
fn earlier_declared_signature_wins() {
    let broad = vec![ParameterSlot::nodes("maps", ClassId::MAP)];
    let narrow = vec![ParameterSlot::node("map", ClassId::MAP)];
    let inputs = || vec![node(ClassId::MAP, 1)];

    let mut queues = classify(inputs());
    let first = resolve([broad.as_slice(), narrow.as_slice()], &mut queues).expect("binding");
    assert_eq!(first.signature_index(), 0);
    assert!(matches!(first.slots()[0], BoundSlot::Collection(_)));

    let mut queues = classify(inputs());
    let swapped = resolve([narrow.as_slice(), broad.as_slice()], &mut queues).expect("binding");
    assert_eq!(swapped.signature_index(), 0);
    assert!(matches!(swapped.slots()[0], BoundSlot::Single(_)));
}

#[test]
fn extra_type_is_reported_as_unconsumed() {
    let inputs = vec![node(ClassId::MAP, 1), node(ClassId::REPLAY, 2), Artifact::Binary(BinFile::new(vec![0, 1]))];
    let sig = [ParameterSlot::node("map", ClassId::MAP), ParameterSlot::node("replay", ClassId::REPLAY)];

    let mut queues = classify(inputs);
    let err = resolve([&sig[..]], &mut queues).unwrap_err();
    match &err {
        CoreError::UnconsumedInput { signature, leftovers } => {
            assert_eq!(*signature, 0);
            assert_eq!(leftovers, &vec![(ArtifactType::Binary, 1)]);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("BinFile x1"));
    // el intento fallido no consume nada
    assert_eq!(queues.total(), 3);
}

#[test]
fn tool_without_signatures_cannot_resolve() {
    let mut queues = classify(vec![node(ClassId::MAP, 1)]);
    let none: [&[ParameterSlot]; 0] = [];
    let err = resolve(none, &mut queues).unwrap_err();
    assert!(matches!(err, CoreError::NoUsableSignature { ref rejections } if rejections.is_empty()));
}
