//! Binary persistence for networks: one `.ntic` file per network.
//!
//! Layout (all integers little-endian on disk):
//! - magic `"NeuroTIC"`, version byte
//! - u32 input count, u16 layer count, u16 neuron count per layer
//! - per neuron: u32 input count, u16 wiring slot
//! - per gap: u16 array count, then per array a 1-byte kind tag
//!   (`'M'`/`'N'`/`'I'`/`'O'`) and its payload; Mixed carries a u32 size and
//!   per-element source tags, Shared carries u16 gap/array, the rest none
//! - per neuron: 1-byte activation id, f32 bias, f32 weights
//!
//! Floats are written as IEEE-754 bit patterns; Rust's `f32` guarantees that
//! representation, so `to_le_bytes`/`from_le_bytes` cover both the native
//! and the byte-swapped host cases.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};

use crate::activation::activation::Activation;
use crate::error::{NetError, NetResult};
use crate::network::net::Network;
use crate::network::wiring::{BufferKind, SourceRef, Wiring};

const MAGIC: &[u8; 8] = b"NeuroTIC";
const VERSION: u8 = 0x00;
/// Fixed budget for the full file name, extension included.
const NAME_LENGTH: usize = 30;
const EXTENSION: &str = ".ntic";

const TAG_MIXED: u8 = b'M';
const TAG_SHARED: u8 = b'N';
const TAG_INPUTS: u8 = b'I';
const TAG_OUTPUTS: u8 = b'O';

const SRC_NEURON: u8 = b'N';
const SRC_INPUT: u8 = b'I';
const SRC_OUTPUT: u8 = b'O';

fn model_path(name: &str) -> NetResult<String> {
    let path = format!("{}{}", name, EXTENSION);
    if path.len() >= NAME_LENGTH {
        return Err(NetError::PathTooLong(path));
    }
    Ok(path)
}

fn write_u16(w: &mut impl Write, value: u16) -> io::Result<()> {
    w.write_all(&value.to_le_bytes())
}

fn write_u32(w: &mut impl Write, value: u32) -> io::Result<()> {
    w.write_all(&value.to_le_bytes())
}

fn write_f32(w: &mut impl Write, value: f32) -> io::Result<()> {
    w.write_all(&value.to_le_bytes())
}

fn read_u8(r: &mut impl Read) -> io::Result<u8> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

fn read_u16(r: &mut impl Read) -> io::Result<u16> {
    let mut buf = [0u8; 2];
    r.read_exact(&mut buf)?;
    Ok(u16::from_le_bytes(buf))
}

fn read_u32(r: &mut impl Read) -> io::Result<u32> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

fn read_f32(r: &mut impl Read) -> io::Result<f32> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(f32::from_le_bytes(buf))
}

impl Network {
    /// Saves a built network to `<name>.ntic`.
    ///
    /// # Errors
    /// `PathTooLong` if the final path exceeds the name budget, otherwise
    /// any underlying I/O failure.
    pub fn save(&self, name: &str) -> NetResult<()> {
        let path = model_path(name)?;
        let file = File::create(&path)?;
        let mut w = BufWriter::new(file);

        w.write_all(MAGIC)?;
        w.write_all(&[VERSION])?;
        write_u32(&mut w, self.input_count as u32)?;
        write_u16(&mut w, self.layer_count() as u16)?;
        for &count in &self.neurons_per_layer {
            write_u16(&mut w, count as u16)?;
        }
        for layer in &self.neurons {
            for neuron in layer {
                write_u32(&mut w, neuron.input_count() as u32)?;
                write_u16(&mut w, neuron.wiring_slot as u16)?;
            }
        }
        for wiring in &self.wiring {
            write_u16(&mut w, wiring.arrays.len() as u16)?;
            for kind in &wiring.arrays {
                match kind {
                    BufferKind::Mixed(sources) => {
                        w.write_all(&[TAG_MIXED])?;
                        write_u32(&mut w, sources.len() as u32)?;
                        for &source in sources {
                            match source {
                                SourceRef::Neuron { layer, index } => {
                                    w.write_all(&[SRC_NEURON])?;
                                    write_u16(&mut w, layer as u16)?;
                                    write_u16(&mut w, index as u16)?;
                                }
                                SourceRef::Input { index } => {
                                    w.write_all(&[SRC_INPUT])?;
                                    write_u16(&mut w, index as u16)?;
                                }
                                SourceRef::Output { index } => {
                                    w.write_all(&[SRC_OUTPUT])?;
                                    write_u16(&mut w, index as u16)?;
                                }
                            }
                        }
                    }
                    BufferKind::Shared { gap, array } => {
                        w.write_all(&[TAG_SHARED])?;
                        write_u16(&mut w, *gap as u16)?;
                        write_u16(&mut w, *array as u16)?;
                    }
                    BufferKind::Inputs => w.write_all(&[TAG_INPUTS])?,
                    BufferKind::Outputs => w.write_all(&[TAG_OUTPUTS])?,
                }
            }
        }
        for layer in &self.neurons {
            for neuron in layer {
                w.write_all(&[neuron.activation.id()])?;
                write_f32(&mut w, neuron.bias)?;
                for &weight in &neuron.weights {
                    write_f32(&mut w, weight)?;
                }
            }
        }
        w.flush()?;
        Ok(())
    }

    /// Loads a network from `<name>.ntic` and rebuilds it.
    ///
    /// # Errors
    /// Magic/version mismatches, unknown tags, truncation, and per-neuron
    /// input counts that disagree with the rebuilt wiring are all reported
    /// as errors rather than returned as a silently-empty network.
    pub fn load(name: &str) -> NetResult<Network> {
        let path = model_path(name)?;
        let file = File::open(&path)?;
        let mut r = BufReader::new(file);

        let mut header = [0u8; 9];
        r.read_exact(&mut header)?;
        if &header[..8] != MAGIC {
            return Err(NetError::BadFormat("magic mismatch".into()));
        }
        if header[8] != VERSION {
            return Err(NetError::BadFormat(format!(
                "unsupported version {:#04x}",
                header[8]
            )));
        }

        let input_count = read_u32(&mut r)? as usize;
        let layer_count = read_u16(&mut r)? as usize;
        let mut sizes = Vec::with_capacity(layer_count);
        for _ in 0..layer_count {
            sizes.push(read_u16(&mut r)? as usize);
        }
        let mut net = Network::new(input_count, &sizes)?;

        let mut declared_inputs = Vec::new();
        for layer in 0..layer_count {
            for index in 0..sizes[layer] {
                declared_inputs.push(read_u32(&mut r)? as usize);
                net.neurons[layer][index].wiring_slot = read_u16(&mut r)? as usize;
            }
        }

        for _ in 1..layer_count {
            let arrays = read_u16(&mut r)? as usize;
            let mut wiring = Wiring::default();
            for _ in 0..arrays {
                let tag = read_u8(&mut r)?;
                let kind = match tag {
                    TAG_MIXED => {
                        let size = read_u32(&mut r)? as usize;
                        let mut sources = Vec::with_capacity(size);
                        for _ in 0..size {
                            let source_tag = read_u8(&mut r)?;
                            sources.push(match source_tag {
                                SRC_NEURON => SourceRef::Neuron {
                                    layer: read_u16(&mut r)? as usize,
                                    index: read_u16(&mut r)? as usize,
                                },
                                SRC_INPUT => SourceRef::Input {
                                    index: read_u16(&mut r)? as usize,
                                },
                                SRC_OUTPUT => SourceRef::Output {
                                    index: read_u16(&mut r)? as usize,
                                },
                                other => {
                                    return Err(NetError::BadFormat(format!(
                                        "unknown source tag {:#04x}",
                                        other
                                    )))
                                }
                            });
                        }
                        BufferKind::Mixed(sources)
                    }
                    TAG_SHARED => BufferKind::Shared {
                        gap: read_u16(&mut r)? as usize,
                        array: read_u16(&mut r)? as usize,
                    },
                    TAG_INPUTS => BufferKind::Inputs,
                    TAG_OUTPUTS => BufferKind::Outputs,
                    other => {
                        return Err(NetError::BadFormat(format!(
                            "unknown array tag {:#04x}",
                            other
                        )))
                    }
                };
                wiring.arrays.push(kind);
            }
            net.wiring.push(wiring);
        }

        net.build()?;

        let mut declared = declared_inputs.into_iter();
        for layer in &net.neurons {
            for neuron in layer {
                if declared.next() != Some(neuron.input_count()) {
                    return Err(NetError::BadFormat(
                        "stored neuron input count disagrees with the wiring".into(),
                    ));
                }
            }
        }

        for layer in 0..layer_count {
            for index in 0..sizes[layer] {
                let id = read_u8(&mut r)?;
                let activation = Activation::from_id(id).ok_or_else(|| {
                    NetError::BadFormat(format!("unknown activation id {}", id))
                })?;
                net.neurons[layer][index].activation = activation;
                net.neurons[layer][index].bias = read_f32(&mut r)?;
                for k in 0..net.neurons[layer][index].input_count() {
                    net.neurons[layer][index].weights[k] = read_f32(&mut r)?;
                }
            }
        }
        Ok(net)
    }
}
