use crate::dicom::FrameHeader;

pub fn print_metadata(header: &FrameHeader) {
    print_field("Modality", header.modality.as_ref());
    print_dimensions(header);
    println!("{:20}: {}", "Bit Depth", header.bit_depth);

    if header.number_of_frames > 1 {
        println!("{:20}: {} (first frame used)", "Frames", header.number_of_frames);
    }

    print_sop_class_info(header);
    println!("{:20}: {}", "Transfer Syntax", header.transfer_syntax);

    println!();
}

fn print_field(name: &str, value: Option<&String>) {
    if let Some(v) = value {
        println!("{name:20}: {v}");
    }
}

fn print_dimensions(header: &FrameHeader) {
    println!(
        "{:20}: {}x{} [{}]",
        "Dimensions", header.dimensions, header.samples_per_pixel, header.photometric_interpretation
    );
}

fn print_sop_class_info(header: &FrameHeader) {
    if let Some(sop_class) = &header.sop_class {
        println!("{:20}: {}", "SOP Class UID", sop_class);
    }
}
