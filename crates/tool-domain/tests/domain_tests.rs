use tool_domain::{BinFile, ClassId, ClassRegistry, DomainError, GbxFormat, Node, NodeFile, TextFile};

#[test]
fn text_and_bin_files_expose_their_content() {
    let text = TextFile::new("hello");
    assert_eq!(text.text(), "hello");
    assert_eq!(String::from(text), "hello");

    let bin = BinFile::new(vec![0, 1, 2]);
    assert_eq!(bin.len(), 3);
    assert_eq!(Vec::<u8>::from(bin), vec![0, 1, 2]);
}

#[test]
fn decode_reads_format_and_chunk_table() {
    let node = Node::build(ClassId::REPLAY, &[(0x0309_3000, vec![7; 5])], b"payload");
    let decoded = Node::decode(node.bytes()).expect("decode replay");
    assert_eq!(decoded.format(), GbxFormat::Binary);
    assert_eq!(decoded.header_chunks().len(), 1);
    assert_eq!(decoded.header_chunks()[0].size, 5);
    assert!(!decoded.header_chunks()[0].heavy);
}

#[test]
fn unsupported_versions_are_rejected() {
    let mut bytes = Node::build(ClassId::MAP, &[], b"").bytes().to_vec();
    bytes[3..5].copy_from_slice(&2u16.to_le_bytes());
    assert_eq!(Node::decode(&bytes), Err(DomainError::UnsupportedVersion(2)));
}

#[test]
fn node_file_wraps_a_node_with_its_name() {
    let node = Node::build(ClassId::MAP, &[], b"");
    let file = NodeFile::named(node.clone(), "Maps/Out/A.Map.Gbx");
    assert_eq!(file.file_name(), Some("Maps/Out/A.Map.Gbx"));
    assert_eq!(Node::from(file), node);
}

#[test]
fn custom_classes_can_be_registered() {
    let mut registry = ClassRegistry::empty();
    assert!(registry.is_empty());
    registry.register(tool_domain::ClassInfo { id: ClassId(0x0900_5000),
                                               name: "CPlugSolid",
                                               extension: Some("Solid") });
    assert_eq!(registry.extension(ClassId(0x0900_5000)), Some("Solid"));
    assert_eq!(registry.len(), 1);
}
