use record::WireRecord;

use pdus::{
    standard_registry, ArticulationParameter, CollisionPdu, DataPdu, DetonationPdu,
    ElectronicEmissionsPdu, EntityId, EntityStatePdu, EventId, FirePdu, FixedDatum, ForceId,
    Marking, VariableDatum, Vector3Double, Vector3Float,
};
use wire::{encode_pdu, DecodeError, Pdu, PduHeader, PduStream, HEADER_SIZE};

fn sample_espdu() -> EntityStatePdu {
    let mut espdu = EntityStatePdu {
        entity_id: EntityId::new(1, 2, 3),
        force_id: ForceId::OPPOSING,
        marking: Marking::ascii("HAVOC-2"),
        ..Default::default()
    };
    espdu.location = Vector3Double::new(3_000_000.0, 4_000_000.0, 5_000_000.0);
    espdu.articulation_parameters.push(ArticulationParameter {
        parameter_type: 4107,
        parameter_value: 0.75,
        ..Default::default()
    });
    espdu
}

#[test]
fn entity_state_through_the_envelope() {
    let espdu = sample_espdu();
    let header = PduHeader::for_pdu(&espdu).with_exercise(1).with_timestamp(5000);
    let bytes = encode_pdu(&header, &espdu).unwrap();
    assert_eq!(bytes.len(), HEADER_SIZE + espdu.wire_size());
    assert_eq!(bytes.len(), 144 + 16);

    let decoded = standard_registry().decode_pdu(&bytes).unwrap();
    assert!(decoded.length_agrees());
    assert_eq!(decoded.header.exercise_id, 1);
    assert_eq!(decoded.body_as::<EntityStatePdu>().unwrap(), &espdu);
}

#[test]
fn every_registered_kind_round_trips_through_dispatch() {
    let registry = standard_registry();

    let fire = FirePdu {
        firing_entity_id: EntityId::new(7, 7, 7),
        range: 2_500.0,
        ..Default::default()
    };
    let detonation = DetonationPdu {
        event_id: EventId::new(7, 7, 70),
        ..Default::default()
    };
    let collision = CollisionPdu {
        mass: 12_000.0,
        velocity: Vector3Float::new(1.0, 2.0, 3.0),
        ..Default::default()
    };
    let data = DataPdu {
        request_id: 5,
        fixed_datums: vec![FixedDatum::new(1, 2)],
        variable_datums: vec![VariableDatum::from_bytes(3, b"PAYLOAD")],
        ..Default::default()
    };
    let emissions = ElectronicEmissionsPdu::default();

    let pdus: Vec<(&dyn wire::Pdu, usize)> = vec![
        (&fire, 96),
        (&detonation, 104),
        (&collision, 60),
        (&data, 12 + 28 + 8 + 16),
        (&emissions, 28),
    ];

    for (pdu, expected_len) in pdus {
        let bytes = encode_pdu(&PduHeader::for_pdu(pdu), pdu).unwrap();
        assert_eq!(bytes.len(), expected_len, "{:?}", pdu.kind());

        let decoded = registry.decode_pdu(&bytes).unwrap();
        assert_eq!(decoded.consumed, bytes.len());
        assert_eq!(decoded.header.kind, pdu.kind());
        assert!(decoded.length_agrees());
    }
}

#[test]
fn mixed_stream_scan_with_unknown_kind() {
    let registry = standard_registry();
    let espdu = sample_espdu();
    let fire = FirePdu::default();

    let mut buf = Vec::new();
    buf.extend_from_slice(&encode_pdu(&PduHeader::for_pdu(&espdu), &espdu).unwrap());

    // A PDU kind the registry does not know (signal, kind 26), crafted
    // by patching the kind byte of a fire PDU.
    let mut foreign = encode_pdu(&PduHeader::for_pdu(&fire), &fire).unwrap();
    foreign[2] = 26;
    buf.extend_from_slice(&foreign);

    buf.extend_from_slice(&encode_pdu(&PduHeader::for_pdu(&fire), &fire).unwrap());

    let mut stream = PduStream::new(&buf, &registry);
    let mut kinds = Vec::new();
    let mut skipped = 0;
    while let Some(result) = stream.next_pdu() {
        match result {
            Ok(decoded) => kinds.push(decoded.header.kind.to_int()),
            Err(DecodeError::UnknownPduKind { header }) => {
                skipped += 1;
                stream.skip_declared(&header).unwrap();
            }
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    assert_eq!(kinds, vec![1, 2]);
    assert_eq!(skipped, 1);
    assert!(stream.is_empty());
}

#[test]
fn stale_length_field_is_surfaced_not_repaired() {
    let fire = FirePdu::default();
    let mut bytes = encode_pdu(&PduHeader::for_pdu(&fire), &fire).unwrap();
    // Stomp the stated length down to zero after encoding.
    bytes[8] = 0;
    bytes[9] = 0;

    let decoded = standard_registry().decode_pdu(&bytes).unwrap();
    assert_eq!(decoded.header.length, 0);
    assert_eq!(decoded.consumed, 96);
    assert!(!decoded.length_agrees());
    assert_eq!(decoded.body_as::<FirePdu>().unwrap(), &fire);
}

#[test]
fn truncated_stream_reports_truncation() {
    let registry = standard_registry();
    let espdu = sample_espdu();
    let bytes = encode_pdu(&PduHeader::for_pdu(&espdu), &espdu).unwrap();

    let mut stream = PduStream::new(&bytes[..bytes.len() - 4], &registry);
    let err = stream.next_pdu().unwrap().unwrap_err();
    assert!(matches!(
        err,
        DecodeError::Record(record::DecodeError::UnexpectedEnd { .. })
    ));
    assert_eq!(stream.position(), 0);
}
