//! Fixed Z80 opcode bytes.

pub const NOP: u8 = 0x00;
pub const HALT: u8 = 0x76;
pub const DI: u8 = 0xF3;
pub const EI: u8 = 0xFB;
pub const SCF: u8 = 0x37;
pub const CCF: u8 = 0x3F;
pub const CPL: u8 = 0x2F;
pub const DAA: u8 = 0x27;
pub const RLCA: u8 = 0x07;
pub const RRCA: u8 = 0x0F;
pub const RLA: u8 = 0x17;
pub const RRA: u8 = 0x1F;
pub const EXX: u8 = 0xD9;
pub const RET: u8 = 0xC9;
pub const RET_CC_BASE: u8 = 0xC0;

pub const ED_PREFIX: u8 = 0xED;
pub const CB_PREFIX: u8 = 0xCB;

pub const RETI_OP: u8 = 0x4D;
pub const RETN_OP: u8 = 0x45;
pub const NEG_OP: u8 = 0x44;
pub const LDI_OP: u8 = 0xA0;
pub const LDD_OP: u8 = 0xA8;
pub const LDIR_OP: u8 = 0xB0;
pub const LDDR_OP: u8 = 0xB8;

pub const EX_DE_HL: u8 = 0xEB;
pub const EX_AF_AF: u8 = 0x08;
pub const EX_SP_HL_IND: u8 = 0xE3;

pub const JP_NN: u8 = 0xC3;
pub const JP_CC_BASE: u8 = 0xC2;
pub const JP_HL_IND: u8 = 0xE9;
pub const JR_E: u8 = 0x18;
pub const JR_CC_BASE: u8 = 0x20;
pub const DJNZ: u8 = 0x10;
pub const CALL_NN: u8 = 0xCD;
pub const CALL_CC_BASE: u8 = 0xC4;

pub const LD_R_R_BASE: u8 = 0x40;
pub const LD_R_N_BASE: u8 = 0x06;
pub const LD_HL_IND_N: u8 = 0x36;
pub const LD_A_BC_IND: u8 = 0x0A;
pub const LD_A_DE_IND: u8 = 0x1A;
pub const LD_BC_IND_A: u8 = 0x02;
pub const LD_DE_IND_A: u8 = 0x12;
pub const LD_A_NN: u8 = 0x3A;
pub const LD_NN_A: u8 = 0x32;
pub const LD_RR_NN_BASE: u8 = 0x01;
pub const LD_SP_HL: u8 = 0xF9;
pub const LD_NN_HL: u8 = 0x22;
pub const LD_HL_NN: u8 = 0x2A;

pub const ADD_BASE: u8 = 0x80;
pub const ADC_BASE: u8 = 0x88;
pub const SUB_BASE: u8 = 0x90;
pub const SBC_BASE: u8 = 0x98;
pub const AND_BASE: u8 = 0xA0;
pub const XOR_BASE: u8 = 0xA8;
pub const OR_BASE: u8 = 0xB0;
pub const CP_BASE: u8 = 0xB8;

pub const ADD_IMM: u8 = 0xC6;
pub const ADC_IMM: u8 = 0xCE;
pub const SUB_IMM: u8 = 0xD6;
pub const SBC_IMM: u8 = 0xDE;
pub const AND_IMM: u8 = 0xE6;
pub const XOR_IMM: u8 = 0xEE;
pub const OR_IMM: u8 = 0xF6;
pub const CP_IMM: u8 = 0xFE;

pub const ADD_HL_RR_BASE: u8 = 0x09;

pub const INC_R_BASE: u8 = 0x04;
pub const DEC_R_BASE: u8 = 0x05;
pub const INC_RR_BASE: u8 = 0x03;
pub const DEC_RR_BASE: u8 = 0x0B;

pub const PUSH_BASE: u8 = 0xC5;
pub const POP_BASE: u8 = 0xC1;

pub const RST_BASE: u8 = 0xC7;

pub const CB_RLC_BASE: u8 = 0x00;
pub const CB_RRC_BASE: u8 = 0x08;
pub const CB_RL_BASE: u8 = 0x10;
pub const CB_RR_BASE: u8 = 0x18;
pub const CB_SLA_BASE: u8 = 0x20;
pub const CB_SRA_BASE: u8 = 0x28;
pub const CB_SLL_BASE: u8 = 0x30;
pub const CB_SRL_BASE: u8 = 0x38;
pub const CB_BIT_BASE: u8 = 0x40;
pub const CB_RES_BASE: u8 = 0x80;
pub const CB_SET_BASE: u8 = 0xC0;

pub const IN_A_N: u8 = 0xDB;
pub const OUT_N_A: u8 = 0xD3;
